//! # Vendorbook
//!
//! A small vendor-management front end over a mock API.
//!
//! The mock API serves static fixtures (vendors, parts, purchase orders)
//! with simulated latency and transient failures. Two pages sit on top: a
//! searchable vendor list and a vendor detail page, each guarded so a slow
//! or superseded load can never overwrite newer state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vendorbook::prelude::*;
//!
//! let mut app = Vendorbook::open("./fixtures")?;
//!
//! app.navigate("/");            // redirects to /vendors
//! app.search("acme");           // debounced
//! app.settle().await;
//! println!("{}", app.render());
//!
//! app.navigate("/vendors/V1");
//! app.settle().await;
//! ```
//!
//! ## Layers
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `vendorbook-core` | entities, behavior config, error codes |
//! | `vendorbook-api` | fixture store, simulator, the four queries |
//! | `vendorbook-views` | list/detail pages, router, debounce, rendering |
//! | `vendorbook` | application shell, configuration |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app;
mod config;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use app::{Page, Vendorbook, VendorbookBuilder, DEFAULT_FIXTURES_DIR};
pub use config::{AppConfig, BehaviorConfig};
pub use error::{Error, Result};

// Re-export types
pub use types::*;
