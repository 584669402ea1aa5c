// crates/devicedb-core/src/model/tree.rs
use super::device::ModelMap;
use crate::kind::DeviceKind;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// # The Brand Tree
///
/// Every device of a single brand, grouped by model name.
///
/// **Structure:** `BrandTree` -> `Vec<PhoneEntry>` -> `ModelMap`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrandTree {
    pub about: BrandAbout,
    pub phones: Vec<PhoneEntry>,
}

/// Brand metadata, taken from the first row of the brand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrandAbout {
    pub brand: String,
    pub brand_zh: String,
    #[serde(rename = "sub-brand")]
    pub sub_brand: String,
    #[serde(rename = "sub-brand_zh")]
    pub sub_brand_zh: String,
    /// Always [`DeviceKind::Phone`]: the catalog is a phone catalog.
    #[serde(rename = "type")]
    pub kind: DeviceKind,
}

/// One model name of a brand.
///
/// Serializes as `{ "<name>": { codename, model, dtype } }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneEntry {
    pub name: String,
    pub details: PhoneDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhoneDetails {
    pub codename: String,
    /// Variant label -> model identifier.
    pub model: ModelMap,
    pub dtype: String,
}

impl Serialize for PhoneEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.details)?;
        map.end()
    }
}
