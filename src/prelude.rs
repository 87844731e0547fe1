//! Convenient imports for Vendorbook.
//!
//! ```ignore
//! use vendorbook::prelude::*;
//!
//! let mut app = Vendorbook::open("./fixtures")?;
//! app.navigate("/vendors");
//! ```

// Main entry point
pub use crate::app::{Page, Vendorbook, VendorbookBuilder};
pub use crate::config::AppConfig;

// Error handling
pub use crate::error::{Error, Result};

// Entities
pub use crate::types::{Order, Part, Vendor, VendorStatus};

// Pages
pub use crate::types::{LoadState, Route};
