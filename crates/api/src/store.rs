//! Fixture store
//!
//! [`FixtureStore`] owns the four fixture collections. It starts empty and
//! is filled exactly once by [`FixtureStore::initialize`]; afterwards the
//! collections are only read.
//!
//! ## Loading order
//!
//! 1. Behavior config is fetched, decoded, overridden and validated
//! 2. Vendors, parts and orders are fetched and decoded concurrently
//! 3. The bundle is published; concurrent initializers share the same load
//!
//! A failed load publishes nothing, so the next `initialize` starts over.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::{debug, info};
use vendorbook_core::{Behavior, Error, Fixtures, LatencyRange, Order, Part, Result, Vendor};

use crate::source::{
    FixtureSource, BEHAVIOR_RESOURCE, ORDERS_RESOURCE, PARTS_RESOURCE, VENDORS_RESOURCE,
};

/// Adjustments applied to the loaded behavior config.
///
/// Unset fields keep the fixture's value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BehaviorOverrides {
    /// Replacement failure rate
    pub failure_rate: Option<f64>,
    /// Replacement latency bounds
    pub latency_ms: Option<LatencyRange>,
}

impl BehaviorOverrides {
    /// Apply the overrides to `behavior`.
    pub fn apply(&self, behavior: &mut Behavior) {
        if let Some(rate) = self.failure_rate {
            behavior.failure_rate = rate;
        }
        if let Some(latency) = self.latency_ms {
            behavior.latency_ms = latency;
        }
    }

    /// Check if no override is set.
    pub fn is_empty(&self) -> bool {
        self.failure_rate.is_none() && self.latency_ms.is_none()
    }
}

/// Write-once holder of the fixture collections.
pub struct FixtureStore {
    source: Arc<dyn FixtureSource>,
    overrides: BehaviorOverrides,
    fixtures: OnceCell<Fixtures>,
}

impl FixtureStore {
    /// Create an uninitialized store reading from `source`.
    pub fn new(source: impl FixtureSource + 'static) -> Self {
        Self::with_overrides(source, BehaviorOverrides::default())
    }

    /// Create an uninitialized store that adjusts the loaded behavior config.
    pub fn with_overrides(source: impl FixtureSource + 'static, overrides: BehaviorOverrides) -> Self {
        Self {
            source: Arc::new(source),
            overrides,
            fixtures: OnceCell::new(),
        }
    }

    /// Load all fixtures unless already loaded.
    ///
    /// Idempotent. Concurrent callers wait for a single load. On failure the
    /// store stays uninitialized.
    pub async fn initialize(&self) -> Result<()> {
        self.fixtures.get_or_try_init(|| self.load()).await?;
        Ok(())
    }

    /// Check whether fixtures have been loaded.
    pub fn is_initialized(&self) -> bool {
        self.fixtures.initialized()
    }

    /// Borrow the loaded fixtures.
    ///
    /// Fails with [`Error::Uninitialized`] before a successful
    /// [`initialize`](Self::initialize).
    pub fn fixtures(&self) -> Result<&Fixtures> {
        self.fixtures.get().ok_or(Error::Uninitialized)
    }

    async fn load(&self) -> Result<Fixtures> {
        info!(source = %self.source.describe(), "Loading fixtures");

        let mut behavior: Behavior = self.fetch_json(BEHAVIOR_RESOURCE).await?;
        if !self.overrides.is_empty() {
            debug!(overrides = ?self.overrides, "Applying behavior overrides");
            self.overrides.apply(&mut behavior);
        }
        behavior.validate()?;

        let (vendors, parts, orders) = tokio::try_join!(
            self.fetch_json::<Vec<Vendor>>(VENDORS_RESOURCE),
            self.fetch_json::<Vec<Part>>(PARTS_RESOURCE),
            self.fetch_json::<Vec<Order>>(ORDERS_RESOURCE),
        )?;

        info!(
            vendors = vendors.len(),
            parts = parts.len(),
            orders = orders.len(),
            failure_rate = behavior.failure_rate,
            latency_min_ms = behavior.latency_ms.min,
            latency_max_ms = behavior.latency_ms.max,
            "Fixtures loaded"
        );

        Ok(Fixtures {
            behavior,
            vendors,
            parts,
            orders,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let body = self.source.fetch(resource).await?;
        serde_json::from_slice(&body).map_err(|e| Error::Decode {
            resource: resource.to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for FixtureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureStore")
            .field("source", &self.source.describe())
            .field("overrides", &self.overrides)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
