// crates/devicedb-core/src/model/mod.rs
pub mod brand;
pub mod dataset;
pub mod device;
pub mod record;
pub mod tree;

pub use brand::{display_brand_name, Brand, BRAND_DISPLAY_NAMES};
pub use dataset::Dataset;
pub use device::{Device, ModelMap, DEFAULT_MODEL_KEY};
pub use record::{DeviceRecord, RawRecord};
pub use tree::{BrandAbout, BrandTree, PhoneDetails, PhoneEntry};
