//! Configuration types for Annona components.
//!
//! Configuration is explicit: the HTTP client takes an [`HttpConfig`] at
//! construction and the CLI resolves catalogs through a [`CatalogsConfig`]
//! loaded from a TOML file. Nothing reads process-wide state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;

/// HTTP client configuration for catalog API calls.
///
/// There is deliberately no retry knob: a transport failure aborts the run.
pub struct HttpConfig {
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

// =============================================================================
// Catalog Configuration (catalogs.toml)
// =============================================================================

/// Default enabled status when not specified in configuration.
fn default_enabled() -> bool {
    true
}

/// Root configuration structure for catalogs.toml.
///
/// This structure represents the entire configuration file containing
/// an array of catalog definitions.
///
/// # Example
///
/// ```toml
/// [[catalogs]]
/// name = "milano"
/// url = "https://dati.comune.milano.it"
/// description = "Open data del Comune di Milano"
///
/// [[catalogs]]
/// name = "staging"
/// url = "https://staging.example.org"
/// enabled = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogsConfig {
    /// Array of catalog configurations.
    pub catalogs: Vec<CatalogEntry>,
}

impl CatalogsConfig {
    /// Returns only enabled catalogs.
    ///
    /// Catalogs with `enabled = false` are excluded from batch exports.
    pub fn enabled_catalogs(&self) -> Vec<&CatalogEntry> {
        self.catalogs.iter().filter(|c| c.enabled).collect()
    }

    /// Find a catalog by name (case-insensitive).
    ///
    /// # Arguments
    /// * `name` - The catalog name to search for.
    ///
    /// # Returns
    /// The matching catalog entry, or None if not found.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.catalogs
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// A single catalog entry in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-readable catalog name.
    ///
    /// Used for `--catalog <name>` lookup and logging.
    pub name: String,

    /// Base URL of the CKAN catalog.
    ///
    /// Example: "<https://dati.comune.milano.it>"
    pub url: String,

    /// Whether this catalog is included in batch exports.
    ///
    /// Defaults to `true` if not specified.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Optional description of the catalog.
    pub description: Option<String>,
}

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "catalogs.toml";

/// Returns the default configuration directory path.
///
/// Uses XDG Base Directory specification: `~/.config/annona/`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("annona"))
}

/// Returns the default configuration file path.
///
/// Path: `~/.config/annona/catalogs.toml`
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join(CONFIG_FILE_NAME))
}

/// Default template content for a new catalogs.toml file.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Annona Catalog Configuration
#
# Usage:
#   annona                        # Export all enabled catalogs
#   annona --catalog milano       # Export a specific catalog by name
#   annona https://...            # Export a single URL (ignores this file)
#
# Set enabled = false to skip a catalog during batch export.

# City of Milan open data
[[catalogs]]
name = "milano"
url = "https://dati.comune.milano.it"
description = "Open data del Comune di Milano"
"#;

/// Load catalog configuration from a TOML file.
///
/// # Arguments
/// * `path` - Optional custom path. If `None`, uses the default XDG path.
///
/// # Returns
/// * `Ok(Some(config))` - Configuration loaded successfully
/// * `Ok(None)` - No configuration file found (not an error)
/// * `Err(e)` - Configuration file exists but is invalid
///
/// # Behavior
/// If no configuration file exists at the default path, a template file
/// is automatically created to help users get started.
pub fn load_catalogs_config(path: Option<PathBuf>) -> Result<Option<CatalogsConfig>, AppError> {
    let using_default_path = path.is_none();
    let config_path = match path {
        Some(p) => p,
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !config_path.exists() {
        if using_default_path {
            match create_default_config(&config_path) {
                Ok(()) => {
                    tracing::info!(
                        "Config file created at {}. Starting export with default catalogs...",
                        config_path.display()
                    );
                }
                Err(e) => {
                    // User might not have write permissions; not fatal.
                    tracing::warn!("Could not create default config template: {}", e);
                    return Ok(None);
                }
            }
        } else {
            // Custom path specified but doesn't exist - that's an error
            return Err(AppError::ConfigError(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        AppError::ConfigError(format!(
            "Failed to read config file '{}': {}",
            config_path.display(),
            e
        ))
    })?;

    let config: CatalogsConfig = toml::from_str(&content).map_err(|e| {
        AppError::ConfigError(format!(
            "Invalid TOML in '{}': {}",
            config_path.display(),
            e
        ))
    })?;

    Ok(Some(config))
}

/// Create a default configuration file with a template.
///
/// Creates the parent directory if it doesn't exist.
fn create_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
    tracing::info!("Created default config template at: {}", path.display());

    Ok(())
}
