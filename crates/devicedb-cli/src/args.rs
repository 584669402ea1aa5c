use clap::{Parser, Subcommand};

/// CLI arguments for devicedb
#[derive(Debug, Parser)]
#[command(
    name = "devicedb",
    version,
    about = "CLI for querying the devicedb-core phone and tablet catalog"
)]
pub struct CliArgs {
    /// CSV file or URL to load; repeat to give fallbacks (default: bundled models.csv)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Vec<String>,

    /// Web root serving database/models.csv or src/database/models.csv
    #[arg(short = 'b', long = "base-url", global = true, conflicts_with = "input")]
    pub base_url: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded dataset
    Stats,

    /// List all brands
    Brands,

    /// Search devices by name, codename or version (case-insensitive)
    Search {
        /// Substring to search for
        query: String,
    },

    /// Show every device of one brand, grouped by model name
    Brand {
        /// Brand code (e.g. xiaomi)
        id: String,
    },

    /// Classify a device name as phone or pad
    Classify {
        /// Device name (e.g. "Xiaomi Pad 6")
        name: String,

        /// Value of the dtype column, if known
        #[arg(long, default_value = "")]
        dtype: String,
    },
}
