//! Vendor detail page
//!
//! Keyed by the vendor id from the route. A load fetches the vendor first,
//! then its parts and orders concurrently; any failure puts the page in the
//! error state, from which [`VendorDetailView::retry`] starts over.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;
use vendorbook_api::MockApi;
use vendorbook_core::Result;

use crate::guard::{GuardedState, Ticket};
use crate::render;
use crate::state::{LoadState, VendorDetail};

/// The vendor detail page.
#[derive(Debug)]
pub struct VendorDetailView {
    api: MockApi,
    vendor_id: String,
    state: Arc<GuardedState<LoadState<VendorDetail>>>,
    latest: Option<JoinHandle<()>>,
}

impl VendorDetailView {
    /// Create an unmounted detail page for `vendor_id`.
    pub fn new(api: MockApi, vendor_id: impl Into<String>) -> Self {
        Self {
            api,
            vendor_id: vendor_id.into(),
            state: Arc::new(GuardedState::new(LoadState::Loading)),
            latest: None,
        }
    }

    /// Vendor this page shows.
    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    /// Start the initial load.
    pub fn mount(&mut self) {
        self.load_now();
    }

    /// Reload after a failure. Returns whether a load started.
    pub fn retry(&mut self) -> bool {
        if self.state.read(|s| s.error().is_none()) {
            return false;
        }
        self.load_now()
    }

    /// Current page state.
    pub fn snapshot(&self) -> LoadState<VendorDetail> {
        self.state.snapshot()
    }

    /// Wait for the most recently started load to finish.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.latest.take() {
            let _ = handle.await;
        }
    }

    /// Render the page as text.
    pub fn render(&self) -> String {
        self.state.read(render::detail_page)
    }

    /// Stop the in-flight load; later results are discarded.
    pub fn unmount(&mut self) {
        self.state.close();
    }

    fn load_now(&mut self) -> bool {
        let Some(ticket) = self.state.begin(|s| *s = LoadState::Loading) else {
            return false;
        };
        let api = self.api.clone();
        let state = Arc::clone(&self.state);
        let vendor_id = self.vendor_id.clone();
        self.latest = Some(
            self.state
                .spawn(async move { run_load(api, state, ticket, vendor_id).await }),
        );
        true
    }
}

impl Drop for VendorDetailView {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn run_load(
    api: MockApi,
    state: Arc<GuardedState<LoadState<VendorDetail>>>,
    ticket: Ticket,
    vendor_id: String,
) {
    debug!(ticket = ticket.sequence(), vendor_id = %vendor_id, "Loading vendor detail");
    let result = fetch_detail(&api, &vendor_id).await;
    state.apply(ticket, |s| *s = LoadState::from_result(result));
}

async fn fetch_detail(api: &MockApi, vendor_id: &str) -> Result<VendorDetail> {
    api.initialize().await?;
    let vendor = api.get_vendor_by_id(vendor_id).await?;
    let (parts, orders) = tokio::try_join!(
        api.get_parts_by_vendor_id(&vendor.id),
        api.get_orders_by_vendor_id(&vendor.id),
    )?;
    Ok(VendorDetail {
        vendor,
        parts,
        orders,
    })
}
