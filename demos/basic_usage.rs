//! Basic usage example for devicedb-rs
//!
//! This example demonstrates how to:
//! - Load the device catalog
//! - List brands and search devices
//! - Build a per-brand tree
//! - Use the caching mechanism
//! - Classify device names

use devicedb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== DeviceDB-RS Basic Usage Example ===\n");

    println!("Loading device catalog...");
    let catalog = DeviceCatalog::default();
    let dataset = catalog.load()?;
    println!("✓ Loaded {} rows from {}\n", dataset.len(), dataset.source());

    // Example 1: Brands
    println!("--- Example 1: List all brands ---");
    let brands = catalog.list_brands()?;
    println!("Total brands: {}", brands.len());
    for (i, brand) in brands.iter().enumerate() {
        println!("{}. {} ({})", i + 1, brand.name, brand.id);
    }
    println!();

    // Example 2: Search by codename
    println!("--- Example 2: Search by codename ---");
    for device in catalog.search("fuxi")? {
        println!("{} ({})", device.phone_name, device.codename);
        for (ver, model) in device.models.iter() {
            println!("  {ver}: {model}");
        }
    }
    println!();

    // Example 3: Brand tree
    println!("--- Example 3: Devices of one brand ---");
    if let Some(tree) = catalog.brand_tree("apple")? {
        println!("{} / {}", tree.about.brand, tree.about.brand_zh);
        for phone in &tree.phones {
            println!("- {} [{}]", phone.name, phone.details.dtype);
        }
    }
    println!();

    // Example 4: Using the cache
    println!("--- Example 4: Cache usage ---");
    let start = std::time::Instant::now();
    let again = catalog.load()?;
    println!("Second load: {:?} (same dataset: {})", start.elapsed(), std::ptr::eq(dataset, again));
    println!();

    // Example 5: Classification
    println!("--- Example 5: Phone or pad ---");
    for name in ["Xiaomi Pad 6", "小米平板6", "Xiaomi 14"] {
        println!("{name}: {}", classify_device_type(name, ""));
    }
    println!();

    // Example 6: Statistics
    println!("--- Example 6: Catalog statistics ---");
    let stats = catalog.stats()?;
    println!("Rows: {} ({} valid)", stats.total_rows, stats.valid_rows);
    println!("Brands: {}", stats.brands);
    println!("Devices: {}", stats.devices);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
