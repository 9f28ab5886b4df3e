//! CKAN client for fetching dataset metadata from CKAN-compatible
//! open data catalogs.
//!
//! The client is deliberately fail-fast: one request chain per call, no
//! retries, no backoff. A transport failure surfaces immediately and aborts
//! the surrounding export run.

use std::time::Duration;

use annona_core::HttpConfig;
use annona_core::error::AppError;
use annona_core::models::RawPackage;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

/// Generic wrapper for CKAN API responses.
///
/// CKAN API reference: <https://docs.ckan.org/en/2.9/api/>
///
/// CKAN always returns responses with the structure:
/// ```json
/// {
///     "success": bool,
///     "result": T
/// }
/// ```
#[derive(Deserialize, Debug)]
struct CkanResponse<T> {
    success: bool,
    result: T,
}

/// HTTP client for interacting with CKAN open data catalogs.
///
/// CKAN (Comprehensive Knowledge Archive Network) is an open-source data
/// management system used by many government open data portals worldwide.
///
/// # Examples
///
/// ```no_run
/// use annona_client::CkanClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CkanClient::new("https://dati.gov.it")?;
/// let names = client.list_package_names().await?;
/// println!("Found {} datasets", names.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CkanClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl CkanClient {
    /// Creates a new CKAN client for the specified catalog.
    ///
    /// # Arguments
    ///
    /// * `base_url_str` - The base URL of the CKAN catalog (e.g., <https://dati.gov.it>)
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidCatalogUrl` if the URL is malformed.
    /// Returns `AppError::ClientError` if the HTTP client cannot be built.
    pub fn new(base_url_str: &str) -> Result<Self, AppError> {
        Self::with_config(base_url_str, &HttpConfig::default())
    }

    /// Creates a new CKAN client with explicit HTTP configuration.
    pub fn with_config(base_url_str: &str, http_config: &HttpConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url_str)
            .map_err(|_| AppError::InvalidCatalogUrl(base_url_str.to_string()))?;

        let client = Client::builder()
            .user_agent("Annona/0.1 (schema-org-export-bot)")
            .timeout(http_config.timeout)
            .build()
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout: http_config.timeout,
        })
    }

    /// Fetches the complete list of package names from the catalog.
    ///
    /// This method calls the CKAN `package_list` API endpoint, which returns
    /// all dataset identifiers available in the catalog, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NetworkError`/`AppError::Timeout` on transport
    /// failures, `AppError::ClientError` on non-success status codes, and
    /// `AppError::Generic` if the CKAN API reports `success: false`.
    pub async fn list_package_names(&self) -> Result<Vec<String>, AppError> {
        let url = self
            .base_url
            .join("api/3/action/package_list")
            .map_err(|e| AppError::Generic(e.to_string()))?;

        let resp = self.send(&url).await?;

        if !resp.status().is_success() {
            return Err(AppError::ClientError(format!(
                "HTTP {} from {}",
                resp.status().as_u16(),
                url
            )));
        }

        let ckan_resp: CkanResponse<Vec<String>> = resp
            .json()
            .await
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        if !ckan_resp.success {
            return Err(AppError::Generic(
                "CKAN API returned success: false".to_string(),
            ));
        }

        Ok(ckan_resp.result)
    }

    /// Fetches the full metadata of a specific package by name.
    ///
    /// This method calls the CKAN `package_show` API endpoint to retrieve
    /// complete metadata for a single dataset.
    ///
    /// # Arguments
    ///
    /// * `name` - The unique identifier or name slug of the dataset
    ///
    /// # Errors
    ///
    /// Returns `AppError::PackageNotFound` when the catalog reports the
    /// package missing (HTTP 404 or `success: false`); transport failures
    /// surface as with [`Self::list_package_names`].
    pub async fn show_package(&self, name: &str) -> Result<RawPackage, AppError> {
        let mut url = self
            .base_url
            .join("api/3/action/package_show")
            .map_err(|e| AppError::Generic(e.to_string()))?;

        url.query_pairs_mut().append_pair("id", name);

        let resp = self.send(&url).await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::PackageNotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::ClientError(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        let ckan_resp: CkanResponse<RawPackage> = resp
            .json()
            .await
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        if !ckan_resp.success {
            return Err(AppError::PackageNotFound(name.to_string()));
        }

        Ok(ckan_resp.result)
    }

    /// Issues a single GET request, classifying transport failures.
    ///
    /// No retry: the first failure is the final answer.
    async fn send(&self, url: &Url) -> Result<reqwest::Response, AppError> {
        match self.client.get(url.clone()).send().await {
            Ok(resp) => Ok(resp),
            Err(e) if e.is_timeout() => Err(AppError::Timeout(self.timeout.as_secs())),
            Err(e) if e.is_connect() => {
                Err(AppError::NetworkError(format!("Connection failed: {}", e)))
            }
            Err(e) => Err(AppError::ClientError(e.to_string())),
        }
    }
}

impl annona_core::traits::CatalogClient for CkanClient {
    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    async fn list_package_names(&self) -> Result<Vec<String>, AppError> {
        self.list_package_names().await
    }

    async fn get_package(&self, name: &str) -> Result<RawPackage, AppError> {
        self.show_package(name).await
    }
}
