//! Page load states

use vendorbook_core::{Order, Part, Result, Vendor};

/// Where a page is in its load cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// A load is in progress
    Loading,
    /// The last load failed with this message
    Error(String),
    /// The last load succeeded
    Loaded(T),
}

impl<T> LoadState<T> {
    /// Settle from a load result. Errors keep only their display message.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Error(e.to_string()),
        }
    }

    /// Check if a load is in progress.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The error message, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// The loaded value, if the last load succeeded.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// List page state.
///
/// `shown` is the size of the last successfully loaded result set; it is
/// kept while a reload is in progress or after a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Current load state
    pub load: LoadState<Vec<Vendor>>,
    /// Vendor count from the last successful load
    pub shown: usize,
}

impl ListState {
    pub(crate) fn new() -> Self {
        Self {
            load: LoadState::Loading,
            shown: 0,
        }
    }

    pub(crate) fn finish(&mut self, result: Result<Vec<Vendor>>) {
        if let Ok(vendors) = &result {
            self.shown = vendors.len();
        }
        self.load = LoadState::from_result(result);
    }
}

/// Everything the detail page shows for one vendor.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorDetail {
    /// The vendor
    pub vendor: Vendor,
    /// Parts with this vendor as default
    pub parts: Vec<Part>,
    /// Orders placed with this vendor
    pub orders: Vec<Order>,
}
