// crates/devicedb-core/src/traits.rs
use crate::common::CatalogStats;
use crate::model::{Brand, BrandTree, Device, DeviceRecord};

/// Read-only views over a loaded device table.
///
/// Implemented for [`Dataset`](crate::Dataset). Every call rebuilds its
/// result from the rows; [`DeviceCatalog`](crate::DeviceCatalog) wraps the
/// same views with lazy loading and caches the brand listing.
///
/// # Example
///
/// ```
/// use devicedb_core::{Dataset, DeviceSearch, SourceLocation};
///
/// let csv = "model,dtype,brand,brand_title,code,code_alias,model_name,ver_name\n\
///            2211133C,mob,xiaomi,Xiaomi,fuxi,,Xiaomi 13,CN\n\
///            2211133G,mob,xiaomi,Xiaomi,fuxi,,Xiaomi 13,Global\n";
/// let ds = Dataset::from_csv_str(csv, SourceLocation::parse("inline")).unwrap();
///
/// let hits = ds.search("fuxi");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].models.len(), 2);
///
/// let tree = ds.brand_tree("xiaomi").unwrap();
/// assert_eq!(tree.phones[0].name, "Xiaomi 13");
/// ```
pub trait DeviceSearch {
    /// The rows the views are computed from.
    fn records(&self) -> &[DeviceRecord];

    fn stats(&self) -> CatalogStats;

    /// Brands in first-seen order, one entry per brand code.
    ///
    /// Rows with an empty `brand` or `brand_title` are ignored. When a brand
    /// appears with different titles, the last row's title wins.
    fn brands(&self) -> Vec<Brand>;

    /// Devices whose model name, codename, codename alias or version label
    /// contains `query`, case-insensitively.
    ///
    /// Rows are grouped by `(brand, dtype, model_name)` in first-match order.
    /// The empty query matches every row that has a model name.
    fn search(&self, query: &str) -> Vec<Device>;

    /// Every device of `brand_id` (exact match), grouped by model name.
    ///
    /// Returns `None` when no row carries that brand.
    fn brand_tree(&self, brand_id: &str) -> Option<BrandTree>;
}
