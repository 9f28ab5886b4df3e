use thiserror::Error;

/// Application-wide error types.
///
/// This enum represents all possible errors that can occur while exporting a
/// catalog. It uses the `thiserror` crate for ergonomic error handling and
/// automatic conversion from underlying library errors.
///
/// # Error Conversion
///
/// Some errors automatically convert from their source types using the
/// `#[from]` attribute:
/// - `serde_json::Error` → `AppError::SerializationError`
/// - `std::io::Error` → `AppError::Io`
///
/// # Examples
///
/// ```no_run
/// use annona_core::error::AppError;
///
/// fn example() -> Result<(), AppError> {
///     Err(AppError::Generic("Something went wrong".to_string()))
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP client request failed.
    ///
    /// This error occurs when a request receives a non-success status code
    /// or the response body cannot be decoded.
    #[error("API client error: {0}")]
    ClientError(String),

    /// Network or connection error.
    ///
    /// This error occurs when a request fails due to connectivity issues,
    /// DNS resolution failures, or the catalog host being unreachable.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timeout.
    ///
    /// This error occurs when a request takes longer than the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The catalog reported that a package does not exist.
    ///
    /// Raised when `package_show` returns HTTP 404 or `success: false`
    /// for a package identifier obtained from `package_list`.
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// A raw package record is missing a structurally required field.
    ///
    /// The only structurally required field is the package identifier;
    /// every other field is optional and maps to an empty or omitted
    /// output field instead of an error.
    #[error("Mapping error: {0}")]
    MappingError(String),

    /// JSON serialization or deserialization failed.
    ///
    /// This error occurs when converting between Rust types and JSON,
    /// typically when parsing API responses or writing the output document.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Filesystem operation failed.
    ///
    /// Raised when the output document or its parent directory cannot
    /// be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CKAN catalog URL provided.
    ///
    /// This error occurs when the provided catalog URL is malformed
    /// or cannot be used to construct valid API endpoints.
    #[error("Invalid CKAN catalog URL: {0}")]
    InvalidCatalogUrl(String),

    /// Configuration file error.
    ///
    /// This error occurs when reading or parsing the configuration file
    /// fails, such as when catalogs.toml is malformed or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic application error for cases not covered by specific variants.
    ///
    /// Use this sparingly - prefer creating specific error variants
    /// for better error handling and debugging.
    #[error("Error: {0}")]
    Generic(String),
}

impl AppError {
    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ClientError(msg) => {
                if msg.contains("timeout") || msg.contains("timed out") {
                    "Request timed out. The catalog may be slow or unreachable.\n   Try again later or check the catalog URL.".to_string()
                } else {
                    format!("API error: {}", msg)
                }
            }
            AppError::NetworkError(msg) => {
                format!("Network error: {}\n   Check your internet connection and the catalog URL.", msg)
            }
            AppError::Timeout(secs) => {
                format!("Request timed out after {} seconds.\n   The catalog may be overloaded. Try again later.", secs)
            }
            AppError::InvalidCatalogUrl(url) => {
                format!(
                    "Invalid catalog URL: {}\n   Example: https://dati.comune.milano.it",
                    url
                )
            }
            AppError::ConfigError(msg) => {
                format!(
                    "Configuration error: {}\n   Check your configuration file.",
                    msg
                )
            }
            AppError::Io(e) => {
                format!("Could not write output: {}\n   Check the output path and permissions.", e)
            }
            _ => self.to_string(),
        }
    }

    /// Returns true if this error affects a single package only.
    ///
    /// Skippable errors are recovered at per-package granularity: the
    /// offending package is logged and dropped while the rest of the batch
    /// continues. Everything else aborts the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use annona_core::error::AppError;
    ///
    /// // A record without an identifier only poisons itself
    /// let err = AppError::MappingError("package record has no id".to_string());
    /// assert!(err.is_skippable());
    ///
    /// // A transport failure means the whole run is compromised
    /// let err = AppError::NetworkError("connection reset".to_string());
    /// assert!(!err.is_skippable());
    /// ```
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            AppError::PackageNotFound(_) | AppError::MappingError(_)
        )
    }
}
