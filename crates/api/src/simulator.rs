//! Latency and failure injection
//!
//! Every query runs [`Simulator::simulate`] before touching the fixtures:
//! the caller is suspended for a random delay drawn from the behavior's
//! latency bounds, then the call fails with [`Error::SimulatedFailure`] with
//! probability `failure_rate`.
//!
//! The random source is a [`StdRng`]; seed it to make a run reproducible.

use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};
use vendorbook_core::{Behavior, Error, LatencyRange, Result};

/// Injects latency and transient failures into mock API calls.
#[derive(Debug)]
pub struct Simulator {
    rng: Mutex<StdRng>,
}

impl Simulator {
    /// Create a simulator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a deterministic simulator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw a delay uniformly from `[min, max]` milliseconds, inclusive.
    ///
    /// Inverted bounds are treated as their swap.
    pub fn sample_delay(&self, latency: &LatencyRange) -> Duration {
        let (lo, hi) = if latency.min <= latency.max {
            (latency.min, latency.max)
        } else {
            (latency.max, latency.min)
        };
        let ms = self.rng.lock().gen_range(lo..=hi);
        Duration::from_millis(ms)
    }

    /// Decide whether a call fails at the given rate.
    ///
    /// A rate of zero or less never fails and never consumes randomness.
    pub fn should_fail(&self, failure_rate: f64) -> bool {
        if failure_rate <= 0.0 {
            return false;
        }
        let draw: f64 = self.rng.lock().gen();
        draw < failure_rate
    }

    /// Delay the caller, then maybe fail.
    pub async fn simulate(&self, behavior: &Behavior) -> Result<()> {
        let delay = self.sample_delay(&behavior.latency_ms);
        debug!(delay_ms = delay.as_millis() as u64, "Simulating latency");
        tokio::time::sleep(delay).await;

        if self.should_fail(behavior.failure_rate) {
            warn!(failure_rate = behavior.failure_rate, "Injecting simulated failure");
            return Err(Error::SimulatedFailure);
        }
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
