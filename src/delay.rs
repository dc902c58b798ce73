//! Simulated submission delays.
//!
//! A screen that wants to "wait for the server" asks [`Timers`] for a delay
//! and keeps the returned [`DelayHandle`]. When the delay elapses its
//! [`DelayId`] is posted onto a single completion queue that the session
//! drains between input events, so completions never interleave with other
//! state changes. Dropping or cancelling the handle aborts the delay.
//!
//! The provider behind [`Timers`] is swappable: [`TokioDelay`] sleeps on a
//! tokio runtime, [`ImmediateDelay`] posts the completion straight away and
//! is meant for tests.

use std::cell::Cell;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Default length of a simulated submission.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Identifies one started delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelayId(u64);

/// Cancellable handle to a running delay.
#[derive(Debug)]
pub struct DelayHandle {
    id: DelayId,
    task: Option<JoinHandle<()>>,
}

impl DelayHandle {
    /// Handle for a delay with no background task to abort.
    pub fn detached(id: DelayId) -> Self {
        Self { id, task: None }
    }

    /// Handle owning the task that will post the completion.
    pub fn for_task(id: DelayId, task: JoinHandle<()>) -> Self {
        Self {
            id,
            task: Some(task),
        }
    }

    pub fn id(&self) -> DelayId {
        self.id
    }

    /// Stop the delay. A completion already queued is left in place; the
    /// owner is expected to ignore ids it no longer holds.
    pub fn cancel(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!(id = self.id.0, "Cancelling pending delay");
            }
            task.abort();
        }
    }
}

impl Drop for DelayHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Something that can wait and then report back on the completion queue.
pub trait DelayProvider {
    /// Start waiting `duration`, then send `id` through `notify`.
    fn start(&self, id: DelayId, duration: Duration, notify: UnboundedSender<DelayId>)
        -> DelayHandle;
}

/// Delay provider backed by `tokio::time::sleep`.
pub struct TokioDelay {
    runtime: Handle,
}

impl TokioDelay {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl DelayProvider for TokioDelay {
    fn start(
        &self,
        id: DelayId,
        duration: Duration,
        notify: UnboundedSender<DelayId>,
    ) -> DelayHandle {
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            // Receiver gone means the session is shutting down
            let _ = notify.send(id);
        });
        DelayHandle::for_task(id, task)
    }
}

/// Delay provider that completes at once. The completion still goes through
/// the queue, so it is observed on the next drain, not during `start`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateDelay;

impl DelayProvider for ImmediateDelay {
    fn start(
        &self,
        id: DelayId,
        _duration: Duration,
        notify: UnboundedSender<DelayId>,
    ) -> DelayHandle {
        let _ = notify.send(id);
        DelayHandle::detached(id)
    }
}

/// Owner of the delay provider and the completion queue.
pub struct Timers {
    provider: Box<dyn DelayProvider>,
    tx: UnboundedSender<DelayId>,
    rx: UnboundedReceiver<DelayId>,
    next_id: Cell<u64>,
}

impl Timers {
    pub fn new(provider: Box<dyn DelayProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            provider,
            tx,
            rx,
            next_id: Cell::new(1),
        }
    }

    /// Start a delay with a fresh id.
    pub fn start(&self, duration: Duration) -> DelayHandle {
        let id = DelayId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        trace!(id = id.0, ?duration, "Starting delay");
        self.provider.start(id, duration, self.tx.clone())
    }

    /// Next completed delay, if any has been posted.
    pub fn try_next(&mut self) -> Option<DelayId> {
        self.rx.try_recv().ok()
    }
}
