//! Application shell for Vendorbook.
//!
//! [`Vendorbook`] owns the mock API and the page currently on screen.
//! Navigating unmounts the previous page, so nothing it started can touch
//! the new one.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use vendorbook_api::{DirSource, FixtureStore, MockApi, Simulator, StaticSource};
use vendorbook_core::{Fixtures, LatencyRange};
use vendorbook_views::render;
use vendorbook_views::router::{self, Resolution, Route, VENDORS_PATH};
use vendorbook_views::{VendorDetailView, VendorListView, DEFAULT_DEBOUNCE};

use crate::config::{AppConfig, BehaviorConfig};
use crate::error::Result;

/// Directory used when no fixtures directory is configured.
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Redirect hops followed before giving up on a path.
const MAX_REDIRECTS: usize = 4;

/// The page currently shown.
#[derive(Debug)]
pub enum Page {
    /// Vendor list
    List(VendorListView),
    /// Vendor detail
    Detail(VendorDetailView),
    /// Placeholder for unknown paths
    NotFound(String),
}

impl Page {
    fn unmount(&mut self) {
        match self {
            Page::List(view) => view.unmount(),
            Page::Detail(view) => view.unmount(),
            Page::NotFound(_) => {}
        }
    }
}

/// The Vendorbook application.
///
/// # Example
///
/// ```ignore
/// use vendorbook::prelude::*;
///
/// let mut app = Vendorbook::builder()
///     .fixtures_dir("./fixtures")
///     .failure_rate(0.0)
///     .open()?;
///
/// app.navigate("/vendors");
/// app.search("acme");
/// app.settle().await;
/// println!("{}", app.render());
/// ```
#[derive(Debug)]
pub struct Vendorbook {
    api: MockApi,
    debounce: Duration,
    route: Option<Route>,
    page: Option<Page>,
}

impl Vendorbook {
    /// Open with fixtures from `dir` and default settings.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::builder().fixtures_dir(dir).open()
    }

    /// Create a builder.
    pub fn builder() -> VendorbookBuilder {
        VendorbookBuilder::new()
    }

    /// The mock API the pages query.
    pub fn api(&self) -> &MockApi {
        &self.api
    }

    /// Route of the current page, if any.
    pub fn current_route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// The current page, if any.
    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Show the page for `path`, following redirects.
    ///
    /// Must be called from within a Tokio runtime. Returns the route shown.
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = resolve_following_redirects(path);
        info!(path, route = %route.path(), "Navigating");

        if let Some(mut old) = self.page.take() {
            old.unmount();
        }
        let page = match &route {
            Route::VendorList => {
                let mut view = VendorListView::new(self.api.clone(), self.debounce);
                view.mount();
                Page::List(view)
            }
            Route::VendorDetail { vendor_id } => {
                let mut view = VendorDetailView::new(self.api.clone(), vendor_id.clone());
                view.mount();
                Page::Detail(view)
            }
            Route::NotFound { path } => Page::NotFound(path.clone()),
        };
        self.page = Some(page);
        self.route = Some(route.clone());
        route
    }

    /// Change the list search text. Returns false off the list page.
    pub fn search(&mut self, query: &str) -> bool {
        match &mut self.page {
            Some(Page::List(view)) => {
                view.set_query(query);
                true
            }
            _ => false,
        }
    }

    /// Refresh the list. Returns whether a load started.
    pub fn refresh(&mut self) -> bool {
        match &mut self.page {
            Some(Page::List(view)) => view.refresh(),
            _ => false,
        }
    }

    /// Retry a failed load. Returns whether a load started.
    pub fn retry(&mut self) -> bool {
        match &mut self.page {
            Some(Page::List(view)) => view.retry(),
            Some(Page::Detail(view)) => view.retry(),
            _ => false,
        }
    }

    /// Leave the detail page for the list. Returns whether it navigated.
    pub fn back(&mut self) -> bool {
        if !matches!(self.route, Some(Route::VendorDetail { .. })) {
            return false;
        }
        self.navigate(VENDORS_PATH);
        true
    }

    /// Wait for the current page's pending load to finish.
    pub async fn settle(&mut self) {
        match &mut self.page {
            Some(Page::List(view)) => view.settle().await,
            Some(Page::Detail(view)) => view.settle().await,
            _ => {}
        }
    }

    /// Error message shown on the current page, if any.
    pub fn page_error(&self) -> Option<String> {
        match &self.page {
            Some(Page::List(view)) => view.snapshot().load.error().map(str::to_owned),
            Some(Page::Detail(view)) => view.snapshot().error().map(str::to_owned),
            _ => None,
        }
    }

    /// Render the current page as text.
    pub fn render(&self) -> String {
        match &self.page {
            Some(Page::List(view)) => view.render(),
            Some(Page::Detail(view)) => view.render(),
            Some(Page::NotFound(path)) => render::not_found_page(path),
            None => String::new(),
        }
    }
}

impl Drop for Vendorbook {
    fn drop(&mut self) {
        if let Some(page) = self.page.as_mut() {
            page.unmount();
        }
    }
}

fn resolve_following_redirects(path: &str) -> Route {
    let mut current = path.to_string();
    for _ in 0..MAX_REDIRECTS {
        match router::resolve(&current) {
            Resolution::Render(route) => return route,
            Resolution::Redirect(to) => {
                debug!(from = %current, to = %to, "Redirect");
                current = to;
            }
        }
    }
    Route::NotFound {
        path: path.to_string(),
    }
}

enum FixtureInput {
    Dir(PathBuf),
    Fixtures(Box<Fixtures>),
}

/// Builder for a [`Vendorbook`].
///
/// # Example
///
/// ```ignore
/// // Deterministic: seeded simulator, no failures, fixed latency
/// let app = Vendorbook::builder()
///     .fixtures_dir("./fixtures")
///     .seed(42)
///     .failure_rate(0.0)
///     .latency(LatencyRange::new(100, 100))
///     .open()?;
/// ```
pub struct VendorbookBuilder {
    input: FixtureInput,
    seed: Option<u64>,
    debounce: Duration,
    behavior: BehaviorConfig,
}

impl VendorbookBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            input: FixtureInput::Dir(PathBuf::from(DEFAULT_FIXTURES_DIR)),
            seed: None,
            debounce: DEFAULT_DEBOUNCE,
            behavior: BehaviorConfig::default(),
        }
    }

    /// Read fixtures from a directory.
    pub fn fixtures_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input = FixtureInput::Dir(dir.as_ref().to_path_buf());
        self
    }

    /// Serve an in-memory fixture set.
    pub fn fixtures(mut self, fixtures: Fixtures) -> Self {
        self.input = FixtureInput::Fixtures(Box::new(fixtures));
        self
    }

    /// Seed the simulator for reproducible latency and failures.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Quiet period before a search runs.
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Override the fixture failure rate.
    pub fn failure_rate(mut self, rate: f64) -> Self {
        self.behavior.failure_rate = Some(rate);
        self
    }

    /// Override the fixture latency bounds.
    pub fn latency(mut self, latency: LatencyRange) -> Self {
        self.behavior.latency_min_ms = Some(latency.min);
        self.behavior.latency_max_ms = Some(latency.max);
        self
    }

    /// Apply every setting present in `config`.
    pub fn config(mut self, config: AppConfig) -> Self {
        if let Some(dir) = config.fixtures_dir {
            self.input = FixtureInput::Dir(dir);
        }
        if let Some(ms) = config.debounce_ms {
            self.debounce = Duration::from_millis(ms);
        }
        if let Some(seed) = config.seed {
            self.seed = Some(seed);
        }
        self.behavior = BehaviorConfig {
            failure_rate: config.behavior.failure_rate.or(self.behavior.failure_rate),
            latency_min_ms: config.behavior.latency_min_ms.or(self.behavior.latency_min_ms),
            latency_max_ms: config.behavior.latency_max_ms.or(self.behavior.latency_max_ms),
        };
        self
    }

    /// Build the application. Fixtures load on the first page mount.
    pub fn open(self) -> Result<Vendorbook> {
        let overrides = self.behavior.overrides()?;
        let store = match self.input {
            FixtureInput::Dir(dir) => {
                info!(dir = %dir.display(), "Using fixture directory");
                FixtureStore::with_overrides(DirSource::new(dir), overrides)
            }
            FixtureInput::Fixtures(fixtures) => {
                FixtureStore::with_overrides(StaticSource::new(*fixtures), overrides)
            }
        };
        let simulator = match self.seed {
            Some(seed) => Simulator::seeded(seed),
            None => Simulator::new(),
        };
        Ok(Vendorbook {
            api: MockApi::new(Arc::new(store), Arc::new(simulator)),
            debounce: self.debounce,
            route: None,
            page: None,
        })
    }
}

impl Default for VendorbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_redirect_chain_resolves() {
        assert_eq!(resolve_following_redirects("/"), Route::VendorList);
        assert_eq!(
            resolve_following_redirects("/nope"),
            Route::NotFound {
                path: "/nope".into()
            }
        );
    }

    #[test]
    fn test_half_latency_config_fails_open() {
        let config = AppConfig {
            behavior: BehaviorConfig {
                latency_max_ms: Some(10),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = Vendorbook::builder().config(config).open().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_open_does_not_load() {
        let app = Vendorbook::open("does-not-exist").unwrap();
        assert!(!app.api().is_initialized());
        assert!(app.current_route().is_none());
        assert_eq!(app.render(), "");
    }
}
