use crate::config::Config;
use crate::delay::TokioDelay;
use crate::session::Session;
use crate::tui::Tui;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{error, info};

/// Input wait while something animates (spinner, toast).
const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Input wait when the screen is static.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Main application: the terminal, the session and the runtime that drives
/// submission delays.
pub struct App {
    tui: Tui,
    session: Session,
    /// Delay tasks run here. Declared last so it outlives the session's
    /// delay handles.
    #[allow(dead_code)]
    runtime: Runtime,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let delay = TokioDelay::new(runtime.handle().clone());
        let session = Session::new(config, config_path, Box::new(delay));
        let tui = Tui::new()?;

        Ok(Self {
            tui,
            session,
            runtime,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Session started");

        let result = self.event_loop();
        if let Err(e) = &result {
            error!("Event loop failed: {:#}", e);
        }

        self.tui.exit()?;
        info!("Session ended");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.session.tick();
            self.draw()?;

            if self.session.should_quit() {
                break;
            }

            let timeout = if self.session.needs_tick() {
                TICK_INTERVAL
            } else {
                IDLE_INTERVAL
            };
            if let Some(event) = self.tui.poll_event(timeout)? {
                self.session.handle_event(event)?;
            }
            self.session.process_timers()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let session = &mut self.session;
        let mut result = Ok(());
        self.tui
            .terminal_mut()
            .draw(|frame| result = session.draw(frame))
            .context("Failed to draw frame")?;
        result
    }
}
