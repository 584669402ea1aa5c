// crates/devicedb-core/src/lib.rs

//! # devicedb-core
//!
//! An in-memory catalog of phone and tablet models, loaded from a flat CSV
//! file and queried through a few read-only views:
//!
//! - [`DeviceCatalog::list_brands`]: deduplicated brands with display names
//! - [`DeviceCatalog::search`]: devices whose name, codename or version match
//! - [`DeviceCatalog::brand_tree`]: every device of one brand, grouped by model name
//! - [`classify_device_type`]: phone vs. pad from the `dtype` column or the name
//!
//! ```no_run
//! use devicedb_core::prelude::*;
//!
//! let catalog = DeviceCatalog::new(CatalogConfig::default());
//! for device in catalog.search("xiaomi 14")? {
//!     println!("{} ({})", device.phone_name, device.codename);
//! }
//! # Ok::<(), devicedb_core::CatalogError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod brands;
pub mod catalog;
pub mod common;
pub mod error;
pub mod kind;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;
pub mod tree;

// Re-exports
pub use crate::catalog::{CatalogConfig, DeviceCatalog};
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, FetchError, MalformedRow, MalformedRowKind, Result};
pub use crate::kind::{classify_device_type, DeviceKind};
pub use crate::loader::{DefaultFetcher, Fetch, SourceLocation};
pub use crate::model::{
    Brand, BrandAbout, BrandTree, Dataset, Device, DeviceRecord, ModelMap, PhoneDetails,
    PhoneEntry, DEFAULT_MODEL_KEY,
};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::DeviceSearch;
