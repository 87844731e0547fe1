//! Application configuration
//!
//! Loaded from an optional TOML file. Every field is optional; unset fields
//! fall back to the builder defaults.
//!
//! ```toml
//! fixtures_dir = "./fixtures"
//! debounce_ms = 250
//! seed = 42
//!
//! [behavior]
//! failure_rate = 0.0
//! latency_min_ms = 50
//! latency_max_ms = 200
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vendorbook_api::BehaviorOverrides;
use vendorbook_core::LatencyRange;

use crate::error::{Error, Result};

/// Settings for a [`Vendorbook`](crate::Vendorbook) instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the four fixture files
    pub fixtures_dir: Option<PathBuf>,
    /// Search debounce in milliseconds
    pub debounce_ms: Option<u64>,
    /// Simulator seed; unset means entropy
    pub seed: Option<u64>,
    /// Overrides for the fixture behavior file
    pub behavior: BehaviorConfig,
}

/// `[behavior]` table: overrides applied on top of the fixture behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Probability of a simulated failure
    pub failure_rate: Option<f64>,
    /// Lower latency bound in milliseconds
    pub latency_min_ms: Option<u64>,
    /// Upper latency bound in milliseconds
    pub latency_max_ms: Option<u64>,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(mut self, other: AppConfig) -> Self {
        if other.fixtures_dir.is_some() {
            self.fixtures_dir = other.fixtures_dir;
        }
        self.debounce_ms = other.debounce_ms.or(self.debounce_ms);
        self.seed = other.seed.or(self.seed);
        self.behavior = self.behavior.merge(other.behavior);
        self
    }
}

impl BehaviorConfig {
    fn merge(self, other: BehaviorConfig) -> Self {
        Self {
            failure_rate: other.failure_rate.or(self.failure_rate),
            latency_min_ms: other.latency_min_ms.or(self.latency_min_ms),
            latency_max_ms: other.latency_max_ms.or(self.latency_max_ms),
        }
    }

    /// Convert to store overrides.
    ///
    /// Latency bounds must be given together.
    pub fn overrides(&self) -> Result<BehaviorOverrides> {
        let latency_ms = match (self.latency_min_ms, self.latency_max_ms) {
            (None, None) => None,
            (Some(min), Some(max)) => Some(LatencyRange::new(min, max)),
            _ => {
                return Err(Error::Config(
                    "latency_min_ms and latency_max_ms must be set together".into(),
                ))
            }
        };
        Ok(BehaviorOverrides {
            failure_rate: self.failure_rate,
            latency_ms,
        })
    }
}
