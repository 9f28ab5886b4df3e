//! Test utilities and stub implementations for integration tests.

use std::collections::{HashMap, HashSet};

use annona_core::models::RawPackage;
use annona_core::traits::CatalogClient;
use annona_core::AppError;

/// In-memory catalog with configurable packages and failure modes.
#[derive(Clone, Default)]
pub struct StubCatalog {
    base_url: String,
    names: Vec<String>,
    packages: HashMap<String, RawPackage>,
    /// When set, `list_package_names` fails with a network error.
    fail_listing: bool,
    /// Names whose fetch fails with a network error.
    broken: HashSet<String>,
}

impl StubCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Adds a package that is both listed and fetchable.
    ///
    /// The metadata is given as raw JSON, mirroring what `package_show`
    /// would return.
    pub fn with_package(mut self, name: &str, json: &str) -> Self {
        let raw: RawPackage = serde_json::from_str(json).expect("invalid stub package JSON");
        self.names.push(name.to_string());
        self.packages.insert(name.to_string(), raw);
        self
    }

    /// Adds a name to the listing without backing metadata, so fetching it
    /// reports the package missing.
    pub fn with_dangling_name(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    /// Adds a name whose fetch fails at the transport level.
    pub fn with_broken_package(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self.broken.insert(name.to_string());
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }
}

impl CatalogClient for StubCatalog {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_package_names(&self) -> Result<Vec<String>, AppError> {
        if self.fail_listing {
            return Err(AppError::NetworkError("connection refused".to_string()));
        }
        Ok(self.names.clone())
    }

    async fn get_package(&self, name: &str) -> Result<RawPackage, AppError> {
        if self.broken.contains(name) {
            return Err(AppError::NetworkError("connection reset".to_string()));
        }
        self.packages
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::PackageNotFound(name.to_string()))
    }
}
