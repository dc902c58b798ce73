//! Busy indicator for a form that is waiting on a submission.

use std::time::{Duration, Instant};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_TIME: Duration = Duration::from_millis(100);

/// Frame picker driven by wall time since the spinner started.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    started: Instant,
}

impl Spinner {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn frame(&self) -> &'static str {
        frame_at(self.started.elapsed())
    }
}

fn frame_at(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / FRAME_TIME.as_millis()) as usize % FRAMES.len();
    FRAMES[idx]
}
