//! Simulated API behavior
//!
//! [`Behavior`] is loaded from `mock-api-behavior.json` and controls how the
//! mock API misbehaves: how long each call is delayed and how often it fails.
//! `mode`, `pagination` and `read_only` are carried for completeness but no
//! query consults them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Listing strategy advertised by the behavior config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The whole collection is returned at once
    FullList,
    /// Results would be paged by a server
    ServerPaged,
}

/// Page size advertised for `server_paged` mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Records per page
    pub page_size: u32,
}

/// Inclusive latency bounds in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyRange {
    /// Shortest delay
    pub min: u64,
    /// Longest delay
    pub max: u64,
}

impl LatencyRange {
    /// Create a latency range
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Check whether `ms` lies within the bounds
    pub fn contains(&self, ms: u64) -> bool {
        self.min <= ms && ms <= self.max
    }
}

/// Simulated API characteristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Behavior {
    /// Listing strategy (unused by queries)
    pub mode: Mode,
    /// Paging parameters (unused by queries)
    pub pagination: Pagination,
    /// Probability in `[0, 1]` that a call fails after its delay
    pub failure_rate: f64,
    /// Whether writes would be rejected (unused, the API is read-only)
    pub read_only: bool,
    /// Delay bounds applied to every call
    pub latency_ms: LatencyRange,
}

impl Behavior {
    /// A behavior with no delay and no failures
    pub fn instant() -> Self {
        Self {
            mode: Mode::FullList,
            pagination: Pagination { page_size: 25 },
            failure_rate: 0.0,
            read_only: true,
            latency_ms: LatencyRange::new(0, 0),
        }
    }

    /// Check the values the simulator relies on
    ///
    /// The failure rate must lie in `[0, 1]` and the latency minimum must not
    /// exceed the maximum.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(Error::InvalidBehavior(format!(
                "failureRate must be within [0, 1], got {}",
                self.failure_rate
            )));
        }
        if self.latency_ms.min > self.latency_ms.max {
            return Err(Error::InvalidBehavior(format!(
                "latencyMs.min ({}) exceeds latencyMs.max ({})",
                self.latency_ms.min, self.latency_ms.max
            )));
        }
        Ok(())
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self::instant()
    }
}
