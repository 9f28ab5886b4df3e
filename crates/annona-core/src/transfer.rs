//! Transfer service: fetch a catalog's packages and map them to Schema.org.
//!
//! The [`TransferService`] is generic over [`CatalogClient`], so the whole
//! pipeline can run against a stub catalog in tests. The run is fully
//! sequential: enumerate package names, fetch each package, map it, collect
//! the results in catalog order.
//!
//! # Failure policy
//!
//! - Enumeration or transport failure aborts the run (fail-fast, no retry).
//! - A package the catalog no longer knows (`PackageNotFound`) is logged
//!   and skipped.
//! - A record missing its identifier (`MappingError`) is logged and
//!   skipped; one bad record never aborts the batch.

use tracing::{info, warn};

use crate::error::AppError;
use crate::map::map_package;
use crate::schema::SchemaDataset;
use crate::traits::CatalogClient;

/// Configuration for a transfer run.
#[derive(Debug, Clone, Default)]
pub struct TransferConfig {
    /// Maximum number of packages to process, mainly for trial runs
    /// against large catalogs. `None` processes everything.
    pub limit: Option<usize>,
}

impl TransferConfig {
    /// Creates a config that processes at most `limit` packages.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

/// Statistics for a completed transfer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// Packages successfully mapped to a Schema.org record.
    pub mapped: usize,
    /// Packages the catalog listed but could not show.
    pub not_found: usize,
    /// Packages that failed the mapping step.
    pub failed: usize,
}

impl TransferStats {
    /// Total number of packages processed.
    pub fn total(&self) -> usize {
        self.mapped + self.not_found + self.failed
    }
}

/// Result of a transfer run: the mapped records plus statistics.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// Mapped records, in catalog order.
    pub datasets: Vec<SchemaDataset>,
    pub stats: TransferStats,
}

/// Service for exporting a catalog's metadata as Schema.org records.
///
/// # Example
///
/// ```ignore
/// use annona_core::{TransferConfig, TransferService};
///
/// let service = TransferService::new(client);
/// let outcome = service.run().await?;
/// println!("Mapped {} datasets", outcome.stats.mapped);
/// ```
pub struct TransferService<C>
where
    C: CatalogClient,
{
    client: C,
    config: TransferConfig,
}

impl<C> TransferService<C>
where
    C: CatalogClient,
{
    /// Creates a transfer service with default configuration.
    pub fn new(client: C) -> Self {
        Self {
            client,
            config: TransferConfig::default(),
        }
    }

    /// Creates a transfer service with custom configuration.
    pub fn with_config(client: C, config: TransferConfig) -> Self {
        Self { client, config }
    }

    /// Runs the full fetch-then-map pipeline for the catalog.
    ///
    /// # Errors
    ///
    /// Propagates any transport-level error from enumeration or fetching;
    /// per-package failures (`PackageNotFound`, `MappingError`) are counted
    /// in the returned statistics instead.
    pub async fn run(&self) -> Result<TransferOutcome, AppError> {
        let catalog_url = self.client.base_url().to_string();
        info!("Fetching package list from {}", catalog_url);

        let mut names = self.client.list_package_names().await?;
        if let Some(limit) = self.config.limit {
            names.truncate(limit);
        }
        info!("Processing {} packages", names.len());

        let mut datasets = Vec::with_capacity(names.len());
        let mut stats = TransferStats::default();

        for name in &names {
            let raw = match self.client.get_package(name).await {
                Ok(raw) => raw,
                Err(e) if e.is_skippable() => {
                    warn!("Skipping package '{}': {}", name, e);
                    stats.not_found += 1;
                    continue;
                }
                Err(e) => {
                    tracing::error!("Fetch failed for package '{}': {}", name, e);
                    return Err(e);
                }
            };

            match map_package(&raw, &catalog_url) {
                Ok(dataset) => {
                    datasets.push(dataset);
                    stats.mapped += 1;
                }
                Err(e) if e.is_skippable() => {
                    warn!("Skipping package '{}': {}", name, e);
                    stats.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(TransferOutcome { datasets, stats })
    }
}
