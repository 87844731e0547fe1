//! Application Comprehensive Test Suite
//!
//! Drives the `vendorbook` facade end to end against the shipped demo
//! fixtures, with a paused Tokio clock so simulated latency and search
//! debounce elapse instantly.
//!
//! ## Key Verification Points
//!
//! 1. Routing: redirects, not-found placeholder, back navigation
//! 2. List page: search, refresh, retry through the facade
//! 3. Detail page: loaded, empty and missing vendors
//! 4. Navigation unmounts the previous page
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test app_comprehensive
//! cargo test --test app_comprehensive navigation::
//! ```

use std::path::PathBuf;

use vendorbook::prelude::*;
use vendorbook::{Behavior, Fixtures, LatencyRange};

// Test modules
pub mod config;
pub mod detail;
pub mod list;
pub mod navigation;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Path to the demo fixtures at the workspace root.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// App with no injected failures and a fixed 100ms latency.
pub fn reliable_app() -> Vendorbook {
    Vendorbook::builder()
        .fixtures_dir(fixtures_dir())
        .seed(42)
        .failure_rate(0.0)
        .latency(LatencyRange::new(100, 100))
        .open()
        .unwrap()
}

/// App whose every query fails.
pub fn failing_app() -> Vendorbook {
    Vendorbook::builder()
        .fixtures_dir(fixtures_dir())
        .seed(42)
        .failure_rate(1.0)
        .latency(LatencyRange::new(10, 10))
        .open()
        .unwrap()
}

/// Navigate and wait for the page to finish loading.
pub async fn visit(app: &mut Vendorbook, path: &str) -> Route {
    let route = app.navigate(path);
    app.settle().await;
    route
}
