//! In-flight form submission shared by the sign-up and sign-in screens.

use crate::delay::{DelayHandle, DelayId, Timers};
use crate::widgets::Spinner;
use std::time::Duration;
use tracing::info;

struct Pending<D> {
    handle: DelayHandle,
    draft: D,
    spinner: Spinner,
}

/// At most one submission of a `D` draft waiting on its delay.
pub(crate) struct Submission<D> {
    form: &'static str,
    pending: Option<Pending<D>>,
}

impl<D> Submission<D> {
    /// `form` names the form in log lines.
    pub(crate) fn new(form: &'static str) -> Self {
        Self {
            form,
            pending: None,
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Current spinner glyph while busy.
    pub(crate) fn spinner_frame(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|pending| pending.spinner.frame())
    }

    /// Snapshot `draft` and start waiting `delay`. Ignored while busy.
    pub(crate) fn start(&mut self, timers: &Timers, delay: Duration, draft: D) {
        if self.is_busy() {
            return;
        }
        let handle = timers.start(delay);
        info!(form = self.form, delay_ms = delay.as_millis() as u64, "Submitting");
        self.pending = Some(Pending {
            handle,
            draft,
            spinner: Spinner::start(),
        });
    }

    /// Hand back the snapshot if `id` is this submission's delay.
    pub(crate) fn complete(&mut self, id: DelayId) -> Option<D> {
        match self.pending.take() {
            Some(pending) if pending.handle.id() == id => {
                info!(form = self.form, "Submission completed");
                Some(pending.draft)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Abort the pending delay, if any.
    pub(crate) fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            info!(form = self.form, "Submission cancelled");
            pending.handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::ImmediateDelay;

    #[test]
    fn test_second_start_is_ignored() {
        let mut timers = Timers::new(Box::new(ImmediateDelay));
        let mut submission = Submission::new("test");
        submission.start(&timers, Duration::ZERO, 1);
        submission.start(&timers, Duration::ZERO, 2);
        assert!(submission.is_busy());
        assert!(submission.spinner_frame().is_some());

        let id = timers.try_next().unwrap();
        assert!(timers.try_next().is_none());
        assert_eq!(submission.complete(id), Some(1));
        assert!(!submission.is_busy());
        assert!(submission.spinner_frame().is_none());
    }

    #[test]
    fn test_foreign_id_keeps_waiting() {
        let mut timers = Timers::new(Box::new(ImmediateDelay));
        let mut submission = Submission::new("test");
        let stray = timers.start(Duration::ZERO).id();
        submission.start(&timers, Duration::ZERO, "draft");

        assert_eq!(submission.complete(stray), None);
        assert!(submission.is_busy());

        submission.cancel();
        assert!(!submission.is_busy());
    }
}
