//! Unified error type for Vendorbook.
//!
//! Wraps the domain error from `vendorbook-core` together with the errors
//! the application shell adds: configuration and I/O.

use thiserror::Error;

/// All Vendorbook errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Mock API or fixture error
    #[error(transparent)]
    Api(#[from] vendorbook_core::Error),

    /// Invalid configuration
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Vendorbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Api(e) => e.error_code(),
            Error::Config(_) => "Config",
            Error::Io(_) => "Io",
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_retryable())
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_transparent() {
        let err: Error = vendorbook_core::Error::vendor_not_found("V9").into();
        assert_eq!(err.to_string(), "Vendor not found: V9");
        assert_eq!(err.error_code(), "NotFound");
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable_passthrough() {
        let err = Error::from(vendorbook_core::Error::SimulatedFailure);
        assert!(err.is_retryable());
        assert!(!Error::Config("bad".into()).is_retryable());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert_eq!(err.error_code(), "Io");
        assert!(err.to_string().starts_with("I/O error"));
    }
}
