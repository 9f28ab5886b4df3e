//! Annona Core - Domain types, sanitization and mapping logic.
//!
//! This crate provides the core functionality for Annona, including:
//!
//! - **Wire models**: [`RawPackage`] and friends, decoded defensively from
//!   the CKAN API
//! - **Sanitizer**: [`strip_html`] and [`split_name`] text transforms
//! - **Mapper**: [`map_package`] / [`map_catalog`], the pure transform from
//!   raw catalog records to Schema.org [`SchemaDataset`] records
//! - **Services**: [`TransferService`] for the fetch-then-map pipeline
//! - **Writer**: [`write_datasets`] for the JSON-LD output document
//! - **Traits**: [`CatalogClient`] for dependency injection
//!
//! # Architecture
//!
//! This crate is designed to be reusable by different frontends and is
//! decoupled from I/O concerns through the [`CatalogClient`] trait: the
//! HTTP implementation lives in `annona-client`, and tests drive the
//! pipeline with in-memory stubs.
//!
//! # Example
//!
//! ```ignore
//! use annona_core::{TransferConfig, TransferService, write_datasets_to_path};
//!
//! let service = TransferService::new(client);
//! let outcome = service.run().await?;
//! write_datasets_to_path(Path::new("schema_org_metadata.json"), &outcome.datasets)?;
//! ```

pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod sanitize;
pub mod schema;
pub mod traits;
pub mod transfer;
pub mod write;

// Configuration
pub use config::{
    CatalogEntry, CatalogsConfig, HttpConfig, default_config_path, load_catalogs_config,
};

// Error handling
pub use error::AppError;

// Wire models
pub use models::{RawOrganization, RawPackage, RawResource, RawTag};

// Sanitization
pub use sanitize::{PersonName, split_name, strip_html};

// Output model
pub use schema::{DataDownload, Organization, Person, SchemaDataset};

// Mapping
pub use map::{map_catalog, map_package};

// Traits for dependency injection
pub use traits::CatalogClient;

// Transfer pipeline
pub use transfer::{TransferConfig, TransferOutcome, TransferService, TransferStats};

// Document writer
pub use write::{write_datasets, write_datasets_to_path};
