//! Mock vendor API
//!
//! An in-process stand-in for a remote vendor service:
//! - [`FixtureStore`]: write-once holder of the fixture collections
//! - [`Simulator`]: random latency and transient failure injection
//! - [`MockApi`]: the four read-only queries
//! - [`FixtureSource`]: where fixtures come from (directory, memory, typed)
//!
//! ```ignore
//! use std::sync::Arc;
//! use vendorbook_api::{DirSource, FixtureStore, MockApi, Simulator};
//!
//! let store = Arc::new(FixtureStore::new(DirSource::new("./fixtures")));
//! let api = MockApi::new(store, Arc::new(Simulator::new()));
//!
//! api.initialize().await?;
//! let acme = api.list_vendors("acme").await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod simulator;
pub mod source;
pub mod store;

pub use client::{filter_vendors, MockApi};
pub use simulator::Simulator;
pub use source::{DirSource, FixtureSource, MemorySource, StaticSource};
pub use store::{BehaviorOverrides, FixtureStore};
