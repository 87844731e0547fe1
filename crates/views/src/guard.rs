//! Ticketed view state
//!
//! A view's loads run as spawned tasks and may finish out of order, or after
//! the view is gone. [`GuardedState`] makes that harmless:
//!
//! - every load starts by taking a [`Ticket`] via [`GuardedState::begin`]
//! - a finished load writes through [`GuardedState::apply`], which accepts
//!   only the newest ticket of a view that is still mounted
//! - [`GuardedState::close`] cancels the view's lifetime token, which stops
//!   every task spawned through [`GuardedState::spawn`]
//!
//! Ticket issue and ticket check both happen under the state lock, so a
//! result can never slip in between a newer load starting and its first
//! state change.

use std::future::Future;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Proof that a load was started; only the newest one may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number of this ticket, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

struct Inner<S> {
    latest: u64,
    value: S,
}

/// View state shared with the view's load tasks.
pub struct GuardedState<S> {
    inner: Mutex<Inner<S>>,
    lifetime: CancellationToken,
}

impl<S> GuardedState<S> {
    /// Wrap an initial state for a freshly mounted view.
    pub fn new(value: S) -> Self {
        Self {
            inner: Mutex::new(Inner { latest: 0, value }),
            lifetime: CancellationToken::new(),
        }
    }

    /// Start a load: issue a new ticket and apply `f` in one step.
    ///
    /// Returns `None` once the view is closed.
    pub fn begin(&self, f: impl FnOnce(&mut S)) -> Option<Ticket> {
        if self.lifetime.is_cancelled() {
            return None;
        }
        let mut inner = self.inner.lock();
        inner.latest += 1;
        f(&mut inner.value);
        Some(Ticket(inner.latest))
    }

    /// Finish a load: apply `f` if `ticket` is still the newest one.
    ///
    /// Returns whether the update was applied.
    pub fn apply(&self, ticket: Ticket, f: impl FnOnce(&mut S)) -> bool {
        let mut inner = self.inner.lock();
        if self.lifetime.is_cancelled() {
            debug!(ticket = ticket.0, "Dropping result for closed view");
            return false;
        }
        if inner.latest != ticket.0 {
            debug!(
                ticket = ticket.0,
                latest = inner.latest,
                "Dropping superseded result"
            );
            return false;
        }
        f(&mut inner.value);
        true
    }

    /// Check if `ticket` could still be applied.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.lifetime.is_cancelled() && self.inner.lock().latest == ticket.0
    }

    /// Number of tickets issued so far.
    pub fn issued(&self) -> u64 {
        self.inner.lock().latest
    }

    /// Read the state.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.lock().value)
    }

    /// Clone the state.
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.read(S::clone)
    }

    /// Token cancelled when the view closes.
    pub fn lifetime(&self) -> &CancellationToken {
        &self.lifetime
    }

    /// Close the view: later results are dropped and spawned tasks stop.
    pub fn close(&self) {
        self.lifetime.cancel();
    }

    /// Check if the view has been closed.
    pub fn is_closed(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    /// Spawn `task`, stopping it early if the view closes.
    pub fn spawn<F>(&self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let lifetime = self.lifetime.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = lifetime.cancelled() => {}
                _ = task => {}
            }
        })
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for GuardedState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("GuardedState")
            .field("latest", &inner.latest)
            .field("value", &inner.value)
            .field("closed", &self.lifetime.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_newest_ticket_wins() {
        let state = GuardedState::new(0u32);
        let first = state.begin(|_| {}).unwrap();
        let second = state.begin(|_| {}).unwrap();

        assert!(!state.apply(first, |v| *v = 1));
        assert!(state.apply(second, |v| *v = 2));
        assert_eq!(state.snapshot(), 2);

        // a late result of the first load still cannot overwrite
        assert!(!state.apply(first, |v| *v = 1));
        assert_eq!(state.snapshot(), 2);
    }

    #[test]
    fn test_closed_state_rejects_everything() {
        let state = GuardedState::new(String::from("initial"));
        let ticket = state.begin(|v| v.push_str("+loading")).unwrap();
        state.close();

        assert!(state.is_closed());
        assert!(!state.is_current(ticket));
        assert!(!state.apply(ticket, |v| *v = "late".into()));
        assert!(state.begin(|v| *v = "again".into()).is_none());
        assert_eq!(state.snapshot(), "initial+loading");
    }

    #[test]
    fn test_tickets_are_sequential() {
        let state = GuardedState::new(());
        let tickets: Vec<u64> = (0..3)
            .map(|_| state.begin(|_| {}).unwrap().sequence())
            .collect();
        assert_eq!(tickets, vec![1, 2, 3]);
        assert_eq!(state.issued(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_stops_spawned_task() {
        let state = Arc::new(GuardedState::new(0u32));
        let ticket = state.begin(|_| {}).unwrap();

        let writer = Arc::clone(&state);
        let handle = state.spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            writer.apply(ticket, |v| *v = 9);
        });

        state.close();
        handle.await.unwrap();
        assert_eq!(state.snapshot(), 0);
    }
}
