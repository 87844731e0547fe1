//! Vendor pages
//!
//! The list and detail pages over [`vendorbook_api::MockApi`], plus the
//! pieces they share:
//! - [`router`]: path to page resolution
//! - [`guard`]: newest-load-wins state with a cancellable lifetime
//! - [`debounce`]: quiet period before a search runs
//! - [`render`]: plain-text page output
//!
//! Pages spawn their loads onto the current Tokio runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod debounce;
pub mod detail;
pub mod guard;
pub mod list;
pub mod render;
pub mod router;
pub mod state;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use detail::VendorDetailView;
pub use guard::{GuardedState, Ticket};
pub use list::VendorListView;
pub use router::{resolve, Resolution, Route};
pub use state::{ListState, LoadState, VendorDetail};
