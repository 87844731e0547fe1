//! Public types re-exported from the workspace crates.

// Entities
pub use vendorbook_core::{
    Contact, Fixtures, LineItem, Order, OrderStatus, Part, Vendor, VendorStatus,
};

// Behavior config
pub use vendorbook_core::{Behavior, LatencyRange, Mode, Pagination};

// Mock API
pub use vendorbook_api::{
    BehaviorOverrides, DirSource, FixtureSource, FixtureStore, MemorySource, MockApi, Simulator,
    StaticSource,
};

// Pages
pub use vendorbook_views::{
    ListState, LoadState, Resolution, Route, VendorDetail, VendorDetailView, VendorListView,
};
