//! Core types for Vendorbook
//!
//! This crate defines the data shared by every layer:
//! - [`Vendor`], [`Part`], [`Order`]: the read-only fixture entities
//! - [`Behavior`]: simulated API characteristics (latency, failure rate)
//! - [`Fixtures`]: the bundle of all four collections
//! - [`Error`]: the canonical error type with stable error codes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod behavior;
pub mod error;
pub mod types;

pub use behavior::{Behavior, LatencyRange, Mode, Pagination};
pub use error::{Error, Result};
pub use types::{Contact, Fixtures, LineItem, Order, OrderStatus, Part, Vendor, VendorStatus};
