//! Trait definitions for external dependencies.
//!
//! The transfer service talks to catalogs through the [`CatalogClient`]
//! trait rather than a concrete HTTP client, enabling:
//!
//! - **Testability**: stub implementations for unit and integration tests
//! - **Decoupling**: core mapping logic doesn't depend on reqwest
//!
//! # Example
//!
//! ```ignore
//! use annona_core::traits::CatalogClient;
//!
//! async fn count_packages<C: CatalogClient>(client: &C) -> Result<usize, annona_core::AppError> {
//!     Ok(client.list_package_names().await?.len())
//! }
//! ```

use std::future::Future;

use crate::error::AppError;
use crate::models::RawPackage;

/// Client for enumerating and fetching dataset metadata from a catalog.
///
/// Implementations issue the actual API calls; the transfer service owns
/// the ordering, failure-isolation and mapping policy.
pub trait CatalogClient: Send + Sync {
    /// Base URL of the catalog, used to build dataset landing pages.
    fn base_url(&self) -> &str;

    /// Lists all package names available on the catalog, in catalog order.
    fn list_package_names(&self)
    -> impl Future<Output = Result<Vec<String>, AppError>> + Send;

    /// Fetches the raw metadata for a specific package.
    ///
    /// # Arguments
    ///
    /// * `name` - The package identifier or name slug
    ///
    /// # Errors
    ///
    /// Returns `AppError::PackageNotFound` when the catalog reports the
    /// package missing, and a transport-level error otherwise.
    fn get_package(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<RawPackage, AppError>> + Send;
}
