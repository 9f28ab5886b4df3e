use clap::Parser;
use std::path::PathBuf;

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "annona")]
#[command(
    author,
    version,
    about = "Export CKAN catalog metadata as Schema.org JSON-LD"
)]
#[command(after_help = "Examples:
  annona https://dati.comune.milano.it     # Export a single catalog URL
  annona --catalog milano                  # Export a catalog by name from config
  annona                                   # Export all enabled catalogs from config
  annona --limit 10 --output sample.json   # Trial run against a large catalog

Environment:
  ANNONA_CATALOG_URL  catalog URL when no argument is given
  ANNONA_OUTPUT       output file path")]
pub struct Config {
    /// URL of a single CKAN catalog to export (ignores the config file)
    #[arg(value_name = "URL", env = "ANNONA_CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Export a specific catalog by name from the config file
    #[arg(short, long, value_name = "NAME", conflicts_with = "catalog_url")]
    pub catalog: Option<String>,

    /// Custom path to the catalogs.toml configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file for the JSON-LD document
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "ANNONA_OUTPUT",
        default_value = "schema_org_metadata.json"
    )]
    pub output: PathBuf,

    /// Maximum number of packages to export per catalog
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,
}
