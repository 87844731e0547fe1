//! Path routing
//!
//! | Path | Result |
//! |------|--------|
//! | `/` | redirect to `/vendors` |
//! | `/vendors` | vendor list |
//! | `/vendors/{id}` | vendor detail |
//! | anything else | not found |
//!
//! A trailing slash is ignored.

/// Path of the vendor list page.
pub const VENDORS_PATH: &str = "/vendors";

/// A page the app can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/vendors`
    VendorList,
    /// `/vendors/{id}`
    VendorDetail {
        /// Vendor id from the path.
        vendor_id: String,
    },
    /// Any path without a page.
    NotFound {
        /// The requested path.
        path: String,
    },
}

impl Route {
    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::VendorList => VENDORS_PATH.to_string(),
            Route::VendorDetail { vendor_id } => format!("{}/{}", VENDORS_PATH, vendor_id),
            Route::NotFound { path } => path.clone(),
        }
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Show this page.
    Render(Route),
    /// Navigate to another path instead.
    Redirect(String),
}

/// Resolve `path` to a page or a redirect.
pub fn resolve(path: &str) -> Resolution {
    let trimmed = path.trim();
    let normalized = match trimmed.trim_end_matches('/') {
        "" => "/",
        p => p,
    };

    if normalized == "/" {
        return Resolution::Redirect(VENDORS_PATH.to_string());
    }
    if normalized == VENDORS_PATH {
        return Resolution::Render(Route::VendorList);
    }
    if let Some(id) = normalized.strip_prefix("/vendors/") {
        if !id.is_empty() && !id.contains('/') {
            return Resolution::Render(Route::VendorDetail {
                vendor_id: id.to_string(),
            });
        }
    }
    Resolution::Render(Route::NotFound {
        path: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_list() {
        assert_eq!(resolve("/"), Resolution::Redirect("/vendors".into()));
        assert_eq!(resolve(""), Resolution::Redirect("/vendors".into()));
    }

    #[test]
    fn test_list_and_detail() {
        assert_eq!(resolve("/vendors"), Resolution::Render(Route::VendorList));
        assert_eq!(resolve("/vendors/"), Resolution::Render(Route::VendorList));
        assert_eq!(
            resolve("/vendors/V1"),
            Resolution::Render(Route::VendorDetail {
                vendor_id: "V1".into()
            })
        );
        assert_eq!(
            resolve("/vendors/V1/"),
            Resolution::Render(Route::VendorDetail {
                vendor_id: "V1".into()
            })
        );
    }

    #[test]
    fn test_unknown_paths() {
        for path in ["/parts", "/vendors/V1/orders", "vendors", "/vendorsX"] {
            assert_eq!(
                resolve(path),
                Resolution::Render(Route::NotFound { path: path.into() }),
                "{}",
                path
            );
        }
    }

    #[test]
    fn test_route_path_round_trip() {
        let route = Route::VendorDetail {
            vendor_id: "V3".into(),
        };
        assert_eq!(route.path(), "/vendors/V3");
        assert_eq!(resolve(&route.path()), Resolution::Render(route));
        assert_eq!(Route::VendorList.path(), "/vendors");
    }
}
