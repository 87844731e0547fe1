//! Fixture sources
//!
//! A [`FixtureSource`] hands out the raw bytes of the four fixture resources.
//! The store decides what to fetch and how to decode it; sources only know
//! how to reach a resource by name.
//!
//! | Source | Backing |
//! |--------|---------|
//! | [`DirSource`] | JSON files in a directory |
//! | [`MemorySource`] | In-memory bodies with a status code per resource |
//! | [`StaticSource`] | Already-typed [`Fixtures`], serialized on demand |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use vendorbook_core::{Error, Fixtures, Result};

/// Behavior config resource name
pub const BEHAVIOR_RESOURCE: &str = "mock-api-behavior.json";
/// Vendor collection resource name
pub const VENDORS_RESOURCE: &str = "vendors.json";
/// Part collection resource name
pub const PARTS_RESOURCE: &str = "parts.json";
/// Order collection resource name
pub const ORDERS_RESOURCE: &str = "orders.json";

/// Somewhere fixture resources can be fetched from.
///
/// Implementations return the resource body, or [`Error::ResourceFetch`]
/// when the resource is unreachable or reports a non-success status.
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Fetch the raw body of `resource`.
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>>;

    /// Short description used in log lines.
    fn describe(&self) -> String;
}

/// Reads fixture resources from files in a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory the resources are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FixtureSource for DirSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>> {
        let path = self.root.join(resource);
        tokio::fs::read(&path)
            .await
            .map_err(|e| Error::ResourceFetch {
                resource: resource.to_string(),
                reason: format!("{}: {}", path.display(), e),
            })
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

/// Serves resources from memory, each with an HTTP-like status code.
///
/// Missing resources behave like a 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, (u16, Vec<u8>)>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `resource` with status 200.
    pub fn with(self, resource: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.with_status(resource, 200, body)
    }

    /// Serve `body` for `resource` with an explicit status.
    pub fn with_status(
        mut self,
        resource: impl Into<String>,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.resources
            .insert(resource.into(), (status, body.into()));
        self
    }
}

#[async_trait]
impl FixtureSource for MemorySource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>> {
        match self.resources.get(resource) {
            Some((status, body)) if (200..300).contains(status) => Ok(body.clone()),
            Some((status, _)) => Err(Error::ResourceFetch {
                resource: resource.to_string(),
                reason: status.to_string(),
            }),
            None => Err(Error::ResourceFetch {
                resource: resource.to_string(),
                reason: "404".to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("memory:{} resources", self.resources.len())
    }
}

/// Serves already-typed fixtures.
#[derive(Debug, Clone)]
pub struct StaticSource {
    fixtures: Fixtures,
}

impl StaticSource {
    /// Wrap a fixture bundle.
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl FixtureSource for StaticSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>> {
        let encoded = match resource {
            BEHAVIOR_RESOURCE => serde_json::to_vec(&self.fixtures.behavior),
            VENDORS_RESOURCE => serde_json::to_vec(&self.fixtures.vendors),
            PARTS_RESOURCE => serde_json::to_vec(&self.fixtures.parts),
            ORDERS_RESOURCE => serde_json::to_vec(&self.fixtures.orders),
            other => {
                return Err(Error::ResourceFetch {
                    resource: other.to_string(),
                    reason: "404".to_string(),
                })
            }
        };
        encoded.map_err(|e| Error::Decode {
            resource: resource.to_string(),
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        format!("static:{} vendors", self.fixtures.vendors.len())
    }
}
