// crates/devicedb-core/src/model/record.rs
use serde::{Deserialize, Serialize};

/// Columns every dataset is expected to carry.
///
/// A missing column is only a warning; the affected field is treated as
/// absent for every row.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "model",
    "dtype",
    "brand",
    "brand_title",
    "code",
    "code_alias",
    "model_name",
    "ver_name",
];

/// One validated row of the device dataset.
///
/// `model` and `brand` were present in the source row (possibly empty).
/// Any other field that was absent is stored as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Retail model identifier, e.g. `2211133C`.
    pub model: String,
    /// Device type discriminator, `"mob"` or `"pad"` in practice.
    pub dtype: String,
    /// Brand code, e.g. `xiaomi`.
    pub brand: String,
    /// Brand title as written in the dataset.
    pub brand_title: String,
    /// Internal codename.
    pub code: String,
    /// Alternative codename.
    pub code_alias: String,
    /// Marketing name shared by every variant, e.g. `Xiaomi 13`.
    pub model_name: String,
    /// Variant label (region, storage, ...).
    pub ver_name: String,
}

/// A row as it comes out of the CSV reader, before validation.
///
/// `None` means the column is missing from the header or the row was too
/// short to reach it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub model: Option<String>,
    pub dtype: Option<String>,
    pub brand: Option<String>,
    pub brand_title: Option<String>,
    pub code: Option<String>,
    pub code_alias: Option<String>,
    pub model_name: Option<String>,
    pub ver_name: Option<String>,
}

impl RawRecord {
    /// Mutable slot for one of the [`REQUIRED_COLUMNS`], `None` for any other name.
    pub(crate) fn slot_mut(&mut self, column: &str) -> Option<&mut Option<String>> {
        match column {
            "model" => Some(&mut self.model),
            "dtype" => Some(&mut self.dtype),
            "brand" => Some(&mut self.brand),
            "brand_title" => Some(&mut self.brand_title),
            "code" => Some(&mut self.code),
            "code_alias" => Some(&mut self.code_alias),
            "model_name" => Some(&mut self.model_name),
            "ver_name" => Some(&mut self.ver_name),
            _ => None,
        }
    }

    pub fn has_field(&self, column: &str) -> bool {
        match column {
            "model" => self.model.is_some(),
            "dtype" => self.dtype.is_some(),
            "brand" => self.brand.is_some(),
            "brand_title" => self.brand_title.is_some(),
            "code" => self.code.is_some(),
            "code_alias" => self.code_alias.is_some(),
            "model_name" => self.model_name.is_some(),
            "ver_name" => self.ver_name.is_some(),
            _ => false,
        }
    }

    /// Validates the row. Rows without `model` or `brand` are rejected.
    pub fn into_record(self) -> Option<DeviceRecord> {
        Some(DeviceRecord {
            model: self.model?,
            brand: self.brand?,
            dtype: self.dtype.unwrap_or_default(),
            brand_title: self.brand_title.unwrap_or_default(),
            code: self.code.unwrap_or_default(),
            code_alias: self.code_alias.unwrap_or_default(),
            model_name: self.model_name.unwrap_or_default(),
            ver_name: self.ver_name.unwrap_or_default(),
        })
    }
}
