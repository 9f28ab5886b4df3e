mod config;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use annona_client::CkanClient;
use annona_core::{
    CatalogEntry, CatalogsConfig, TransferConfig, TransferService, TransferStats,
    load_catalogs_config, write_datasets_to_path,
};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::parse();

    // Resolve which catalogs this run exports:
    // 1. Direct URL (argument or ANNONA_CATALOG_URL)
    // 2. Named catalog from config
    // 3. Batch mode (all enabled catalogs)
    let targets = match (&config.catalog_url, &config.catalog) {
        (Some(url), None) => vec![direct_entry(url)],
        (None, name) => {
            let catalogs = load_catalogs_config(config.config.clone())?.ok_or_else(|| {
                anyhow::anyhow!(
                    "No configuration file found. Create ~/.config/annona/catalogs.toml or pass a catalog URL"
                )
            })?;
            select_catalogs(name.as_deref(), &catalogs)?
        }
        // This case is prevented by clap's conflicts_with
        (Some(_), Some(_)) => unreachable!("catalog URL and --catalog are mutually exclusive"),
    };

    if targets.is_empty() {
        info!("No enabled catalogs found in configuration.");
        info!("Add catalogs to ~/.config/annona/catalogs.toml or run: annona <url>");
        return Ok(());
    }

    let transfer_config = TransferConfig {
        limit: config.limit,
    };

    let mut all_datasets = Vec::new();
    for entry in &targets {
        info!("Exporting catalog: {}", entry.url);

        let client = match CkanClient::new(&entry.url) {
            Ok(client) => client,
            Err(e) => {
                error!("{}", e.user_message());
                return Err(e).with_context(|| format!("Invalid catalog '{}'", entry.name));
            }
        };

        let service = TransferService::with_config(client, transfer_config.clone());
        let outcome = match service.run().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("{}", e.user_message());
                return Err(e).with_context(|| format!("Export failed for catalog '{}'", entry.name));
            }
        };

        print_catalog_summary(&entry.url, &outcome.stats);
        all_datasets.extend(outcome.datasets);
    }

    info!(
        "Saving {} datasets to {}",
        all_datasets.len(),
        config.output.display()
    );
    write_datasets_to_path(&config.output, &all_datasets)
        .context("Failed to write output document")?;

    info!("Transfer completed successfully.");
    Ok(())
}

/// Builds a catalog entry for a directly supplied URL (modes without a
/// config file). The URL doubles as the display name.
fn direct_entry(url: &str) -> CatalogEntry {
    CatalogEntry {
        name: url.to_string(),
        url: url.to_string(),
        enabled: true,
        description: None,
    }
}

/// Selects the catalogs to export from a loaded configuration.
///
/// With a name, returns exactly that catalog (even when disabled, with a
/// note); without one, returns every enabled catalog in config order.
fn select_catalogs(
    name: Option<&str>,
    catalogs: &CatalogsConfig,
) -> anyhow::Result<Vec<CatalogEntry>> {
    match name {
        Some(name) => {
            let entry = catalogs
                .find_by_name(name)
                .ok_or_else(|| anyhow::anyhow!("Catalog '{}' not found in configuration", name))?;

            if !entry.enabled {
                info!(
                    "Note: Catalog '{}' is marked as disabled in configuration",
                    name
                );
            }

            Ok(vec![entry.clone()])
        }
        None => Ok(catalogs.enabled_catalogs().into_iter().cloned().collect()),
    }
}

/// Print a summary for one exported catalog.
fn print_catalog_summary(catalog_url: &str, stats: &TransferStats) {
    info!("");
    info!("═════════════════════════════════════════════════════════");
    info!("Export complete: {}", catalog_url);
    info!("═════════════════════════════════════════════════════════");
    info!("  + Mapped:            {}", stats.mapped);
    info!("  ? Not found:         {}", stats.not_found);
    info!("  ✗ Failed:            {}", stats.failed);
    info!("─────────────────────────────────────────────────────────");
    info!("  Total processed:     {}", stats.total());
    info!("═════════════════════════════════════════════════════════");

    if stats.not_found == 0 && stats.failed == 0 {
        info!("All packages mapped successfully!");
    }
}
