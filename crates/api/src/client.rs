//! Mock API queries
//!
//! [`MockApi`] is the handle views talk to. Every query:
//!
//! 1. Borrows the fixtures, failing with `Uninitialized` if not loaded
//! 2. Runs the simulator (random delay, maybe a simulated failure)
//! 3. Filters the relevant collection in memory
//!
//! | Query | Result |
//! |-------|--------|
//! | `list_vendors(q)` | Vendors whose name or id contains `q` (case-insensitive) |
//! | `get_vendor_by_id(id)` | The vendor, or `NotFound` |
//! | `get_parts_by_vendor_id(id)` | Parts whose default vendor is `id` |
//! | `get_orders_by_vendor_id(id)` | Orders placed with `id` |

use std::sync::Arc;

use tracing::debug;
use vendorbook_core::{Behavior, Error, Fixtures, Order, Part, Result, Vendor};

use crate::simulator::Simulator;
use crate::store::FixtureStore;

/// Cloneable handle over a fixture store and a simulator.
#[derive(Debug, Clone)]
pub struct MockApi {
    store: Arc<FixtureStore>,
    simulator: Arc<Simulator>,
}

impl MockApi {
    /// Create an API over `store` using `simulator` for latency and failures.
    pub fn new(store: Arc<FixtureStore>, simulator: Arc<Simulator>) -> Self {
        Self { store, simulator }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<FixtureStore> {
        &self.store
    }

    /// Load fixtures if not yet loaded. See [`FixtureStore::initialize`].
    pub async fn initialize(&self) -> Result<()> {
        self.store.initialize().await
    }

    /// Check whether fixtures have been loaded.
    pub fn is_initialized(&self) -> bool {
        self.store.is_initialized()
    }

    /// The active behavior config.
    pub fn behavior(&self) -> Result<&Behavior> {
        Ok(&self.store.fixtures()?.behavior)
    }

    /// List vendors, optionally filtered by a search string.
    ///
    /// The query is trimmed and lowercased; an empty query returns every
    /// vendor in stored order.
    pub async fn list_vendors(&self, query: &str) -> Result<Vec<Vendor>> {
        let fixtures = self.prepare().await?;
        let vendors = filter_vendors(&fixtures.vendors, query);
        debug!(query, matched = vendors.len(), "list_vendors");
        Ok(vendors)
    }

    /// Get a single vendor by exact id.
    pub async fn get_vendor_by_id(&self, id: &str) -> Result<Vendor> {
        let fixtures = self.prepare().await?;
        fixtures
            .vendors
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| Error::vendor_not_found(id))
    }

    /// Get every part whose default vendor is `vendor_id`.
    pub async fn get_parts_by_vendor_id(&self, vendor_id: &str) -> Result<Vec<Part>> {
        let fixtures = self.prepare().await?;
        Ok(fixtures
            .parts
            .iter()
            .filter(|p| p.default_vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    /// Get every order placed with `vendor_id`.
    pub async fn get_orders_by_vendor_id(&self, vendor_id: &str) -> Result<Vec<Order>> {
        let fixtures = self.prepare().await?;
        Ok(fixtures
            .orders
            .iter()
            .filter(|o| o.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn prepare(&self) -> Result<&Fixtures> {
        let fixtures = self.store.fixtures()?;
        self.simulator.simulate(&fixtures.behavior).await?;
        Ok(fixtures)
    }
}

/// Apply the vendor search filter.
///
/// Matches when the lowercased name or lowercased id contains the trimmed,
/// lowercased query. Order is preserved.
pub fn filter_vendors(vendors: &[Vendor], query: &str) -> Vec<Vendor> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vendors.to_vec();
    }
    vendors
        .iter()
        .filter(|v| v.name.to_lowercase().contains(&query) || v.id.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
