//! devicedb: command-line interface for devicedb-core
//!
//! Inspect a device catalog from the terminal: print dataset statistics,
//! list brands, search devices, show one brand's devices grouped by model
//! name, and classify a device name as phone or pad.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ devicedb stats
//!
//! - List brands
//!   $ devicedb brands
//!
//! - Search by name, codename or version label
//!   $ devicedb search fuxi
//!
//! - One brand's devices, as JSON
//!   $ devicedb --json brand huawei
//!
//! - Classify a name, optionally with a dtype
//!   $ devicedb classify "Xiaomi Pad 6"
//!   $ devicedb classify "Xiaomi Pad 6" --dtype mob
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the `models.csv` bundled with `devicedb-core`,
//! falling back to `database/`, `src/database/` and `data/` under the working
//! directory. `--input <PATH|URL>` (repeatable) replaces that list, and
//! `--base-url <URL>` tries `<URL>/database/models.csv` then
//! `<URL>/src/database/models.csv`.
//!
//! Diagnostics go to stderr; set `RUST_LOG=info` to see which source was used.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use devicedb_core::{classify_device_type, CatalogConfig, DeviceCatalog};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match (&args.base_url, args.input.is_empty()) {
        (Some(base_url), _) => CatalogConfig::for_base_url(base_url),
        (None, false) => CatalogConfig::with_sources(args.input.iter().map(String::as_str)),
        (None, true) => CatalogConfig::default(),
    };
    // Nothing is read until a command needs the dataset
    let catalog = DeviceCatalog::new(config);

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Rows: {} ({} valid)", stats.total_rows, stats.valid_rows);
                println!("  Malformed rows: {}", stats.malformed_rows);
                println!("  Brands: {}", stats.brands);
                println!("  Devices: {}", stats.devices);
            }
        }

        Commands::Brands => {
            let brands = catalog.list_brands()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(brands)?);
            } else {
                for b in brands {
                    println!("{} ({})", b.name, b.id);
                }
            }
        }

        Commands::Search { query } => {
            let devices = catalog.search(&query)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&devices)?);
            } else if devices.is_empty() {
                println!("No devices found matching: {query}");
            } else {
                for d in &devices {
                    println!("{} [{}] {} ({})", d.phone_name, d.dtype, d.brand_name, d.codename);
                    for (ver, model) in d.models.iter() {
                        println!("    {ver}: {model}");
                    }
                }
            }
        }

        Commands::Brand { id } => match catalog.brand_tree(&id)? {
            Some(tree) if args.json => {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            }
            Some(tree) => {
                println!("{} ({})", tree.about.brand_zh, tree.about.brand);
                for phone in &tree.phones {
                    println!(
                        "- {} [{}] {}",
                        phone.name, phone.details.dtype, phone.details.codename
                    );
                    for (ver, model) in phone.details.model.iter() {
                        println!("    {ver}: {model}");
                    }
                }
            }
            None => eprintln!("No brand found for: {id}"),
        },

        Commands::Classify { name, dtype } => {
            let kind = classify_device_type(&name, &dtype);
            if args.json {
                println!("{}", serde_json::to_string(&kind)?);
            } else {
                println!("{kind}");
            }
        }
    }

    Ok(())
}
