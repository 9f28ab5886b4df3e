//! Annona Client - HTTP client for the CKAN action API.
//!
//! This crate provides [`CkanClient`], the HTTP implementation of the
//! `CatalogClient` trait from `annona-core`. It handles request building,
//! response envelope parsing, and error classification for CKAN-compatible
//! open data catalogs.

pub mod ckan;

// Re-export main client type
pub use ckan::CkanClient;
