// crates/devicedb-core/src/prelude.rs
pub use crate::catalog::{CatalogConfig, DeviceCatalog};
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, Result};
pub use crate::kind::{classify_device_type, DeviceKind};
pub use crate::loader::SourceLocation;
pub use crate::model::{Brand, BrandTree, Dataset, Device, DeviceRecord};
pub use crate::traits::DeviceSearch;
