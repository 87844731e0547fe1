//! Error types for the mock API
//!
//! Every failure a view can observe is one [`Error`] variant. Each variant
//! has a stable code and a human-readable message that views display as-is.
//!
//! ## Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | Uninitialized | Query issued before the fixture store was loaded |
//! | ResourceFetch | A fixture resource was unreachable or returned a non-success status |
//! | Decode | A fixture resource did not match the expected shape |
//! | InvalidBehavior | The behavior config has out-of-range values |
//! | SimulatedFailure | Randomly injected transient failure |
//! | NotFound | Requested vendor does not exist |

use thiserror::Error;

/// All mock API errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Read attempted before fixture load
    #[error("Mock API not initialized. Call initialize() first.")]
    Uninitialized,

    /// A fixture resource could not be fetched
    #[error("Failed to load {resource} ({reason})")]
    ResourceFetch {
        /// Resource name, e.g. `vendors.json`
        resource: String,
        /// Status code or I/O failure description
        reason: String,
    },

    /// A fixture resource was fetched but could not be parsed
    #[error("Failed to parse {resource}: {reason}")]
    Decode {
        /// Resource name
        resource: String,
        /// Parser message
        reason: String,
    },

    /// Behavior config values the simulator cannot honor
    #[error("invalid behavior config: {0}")]
    InvalidBehavior(String),

    /// Randomly injected transient failure
    #[error("Mock API error. Please retry.")]
    SimulatedFailure,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. `Vendor`
        entity: &'static str,
        /// The id that was looked up
        id: String,
    },
}

/// Result type for mock API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a vendor not-found error
    pub fn vendor_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            entity: "Vendor",
            id: id.into(),
        }
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Uninitialized => "Uninitialized",
            Error::ResourceFetch { .. } => "ResourceFetch",
            Error::Decode { .. } => "Decode",
            Error::InvalidBehavior(_) => "InvalidBehavior",
            Error::SimulatedFailure => "SimulatedFailure",
            Error::NotFound { .. } => "NotFound",
        }
    }

    /// Check if this error is transient.
    ///
    /// Transient errors may succeed when the same load is run again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::SimulatedFailure | Error::ResourceFetch { .. })
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
