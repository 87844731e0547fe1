//! Resettable delay before running a task
//!
//! Each [`Debouncer::schedule`] call cancels the previously scheduled timer,
//! so a burst of calls runs only the last task, once the burst has been
//! quiet for the configured delay. Cancellation covers the waiting phase
//! only; a task that already started runs to completion.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Default quiet period for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Runs the most recently scheduled task after a quiet period.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    parent: CancellationToken,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    /// Create a debouncer whose timers die with `parent`.
    pub fn new(delay: Duration, parent: CancellationToken) -> Self {
        Self {
            delay,
            parent,
            pending: None,
        }
    }

    /// Quiet period before a scheduled task runs.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending task with `task`, to run after the quiet period.
    pub fn schedule<F>(&mut self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let token = self.parent.child_token();
        self.pending = Some(token.clone());

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    trace!("Debounce timer superseded");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }
            task.await;
        })
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
