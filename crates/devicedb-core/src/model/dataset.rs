// crates/devicedb-core/src/model/dataset.rs
use super::record::DeviceRecord;
use crate::error::MalformedRow;
use crate::loader::SourceLocation;

/// The loaded device table.
///
/// Holds the validated rows in source order together with what the loader
/// noticed on the way: which source was used, how many rows the parser
/// produced, which rows were malformed and which columns were missing. Built by the loader
/// module; see [`DeviceCatalog::load`](crate::DeviceCatalog::load) and
/// [`Dataset::from_csv_str`].
#[derive(Clone, Debug)]
pub struct Dataset {
    pub(crate) records: Vec<DeviceRecord>,
    pub(crate) source: SourceLocation,
    pub(crate) total_rows: usize,
    pub(crate) malformed: Vec<MalformedRow>,
    pub(crate) missing_columns: Vec<String>,
}

impl Dataset {
    /// Valid rows, in source order.
    pub fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Where the CSV text came from.
    pub fn source(&self) -> &SourceLocation {
        &self.source
    }

    /// Rows the parser produced, before dropping rows without `model` or `brand`.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Rows reported by the parser but not fatal to the load.
    pub fn malformed_rows(&self) -> &[MalformedRow] {
        &self.malformed
    }

    /// Expected columns that were not found on the first row.
    pub fn missing_columns(&self) -> &[String] {
        &self.missing_columns
    }
}
