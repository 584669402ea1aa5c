// crates/devicedb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`DeviceSearch::stats`](crate::DeviceSearch::stats); row
/// counts reflect what the loader saw, device and brand counts the views
/// built on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Rows produced by the CSV parser.
    pub total_rows: usize,
    /// Rows kept after dropping those without `model` or `brand`.
    pub valid_rows: usize,
    /// Rows the parser reported: field-count mismatches (kept) and
    /// unreadable rows (dropped).
    pub malformed_rows: usize,
    /// Distinct brands in the brand listing.
    pub brands: usize,
    /// Distinct `(brand, dtype, model_name)` devices.
    pub devices: usize,
}
