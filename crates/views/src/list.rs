//! Vendor list page
//!
//! Loads `list_vendors(search)` on mount, after each debounced change of the
//! search text, and on refresh/retry. Only the newest load may update the
//! page; closing the page stops everything it started.
//!
//! Must be used from within a Tokio runtime: loads run as spawned tasks.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;
use vendorbook_api::MockApi;

use crate::debounce::Debouncer;
use crate::guard::{GuardedState, Ticket};
use crate::render;
use crate::state::{ListState, LoadState};

/// The vendor list page.
#[derive(Debug)]
pub struct VendorListView {
    api: MockApi,
    query: String,
    state: Arc<GuardedState<ListState>>,
    debouncer: Debouncer,
    latest: Option<JoinHandle<()>>,
}

impl VendorListView {
    /// Create an unmounted list page. Call [`mount`](Self::mount) to load.
    pub fn new(api: MockApi, debounce: Duration) -> Self {
        let state = Arc::new(GuardedState::new(ListState::new()));
        let debouncer = Debouncer::new(debounce, state.lifetime().clone());
        Self {
            api,
            query: String::new(),
            state,
            debouncer,
            latest: None,
        }
    }

    /// Start the initial load.
    pub fn mount(&mut self) {
        self.load_now();
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text; the load runs once typing pauses.
    ///
    /// Setting the current text again does nothing.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        if self.state.is_closed() {
            return;
        }

        let api = self.api.clone();
        let state = Arc::clone(&self.state);
        let query = self.query.clone();
        let lifetime = self.state.lifetime().clone();
        self.latest = Some(self.debouncer.schedule(async move {
            let Some(ticket) = state.begin(|s| s.load = LoadState::Loading) else {
                return;
            };
            tokio::select! {
                _ = lifetime.cancelled() => {}
                _ = run_load(api, state, ticket, query) => {}
            }
        }));
    }

    /// Reload with the current search text.
    ///
    /// Ignored while a load is in progress. Returns whether a load started.
    pub fn refresh(&mut self) -> bool {
        if self.state.read(|s| s.load.is_loading()) {
            return false;
        }
        self.load_now()
    }

    /// Reload after a failure. Returns whether a load started.
    pub fn retry(&mut self) -> bool {
        if self.state.read(|s| s.load.error().is_none()) {
            return false;
        }
        self.load_now()
    }

    /// Current page state.
    pub fn snapshot(&self) -> ListState {
        self.state.snapshot()
    }

    /// Number of loads started so far.
    pub fn loads_started(&self) -> u64 {
        self.state.issued()
    }

    /// Wait for the most recently started load (or pending search) to finish.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.latest.take() {
            let _ = handle.await;
        }
    }

    /// Render the page as text.
    pub fn render(&self) -> String {
        self.state.read(|s| render::list_page(&self.query, s))
    }

    /// Stop all pending work; later results are discarded.
    pub fn unmount(&mut self) {
        self.debouncer.cancel();
        self.state.close();
    }

    fn load_now(&mut self) -> bool {
        self.debouncer.cancel();
        let Some(ticket) = self.state.begin(|s| s.load = LoadState::Loading) else {
            return false;
        };
        let api = self.api.clone();
        let state = Arc::clone(&self.state);
        let query = self.query.clone();
        self.latest = Some(
            self.state
                .spawn(async move { run_load(api, state, ticket, query).await }),
        );
        true
    }
}

impl Drop for VendorListView {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn run_load(api: MockApi, state: Arc<GuardedState<ListState>>, ticket: Ticket, query: String) {
    debug!(ticket = ticket.sequence(), query = %query, "Loading vendors");
    let result = match api.initialize().await {
        Ok(()) => api.list_vendors(&query).await,
        Err(e) => Err(e),
    };
    state.apply(ticket, |s| s.finish(result));
}
