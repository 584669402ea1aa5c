// crates/devicedb-core/src/search.rs
use crate::brands::list_brands;
use crate::common::CatalogStats;
use crate::model::{Brand, BrandTree, Dataset, Device, DeviceRecord, ModelMap};
use crate::text::{contains_folded, fold_key};
use crate::traits::DeviceSearch;
use crate::tree::build_brand_tree;
use std::collections::{HashMap, HashSet};

/// Grouping key of a search result.
type DeviceKey<'a> = (&'a str, &'a str, &'a str);

fn device_key(row: &DeviceRecord) -> DeviceKey<'_> {
    (row.brand.as_str(), row.dtype.as_str(), row.model_name.as_str())
}

fn matches_query(row: &DeviceRecord, folded_query: &str) -> bool {
    [&row.model_name, &row.code, &row.code_alias, &row.ver_name]
        .iter()
        .any(|field| contains_folded(field, folded_query))
}

/// Devices matching `query`, grouped by `(brand, dtype, model_name)`.
pub fn search_devices(records: &[DeviceRecord], query: &str) -> Vec<Device> {
    let q = fold_key(query);
    let mut out: Vec<Device> = Vec::new();
    let mut by_key: HashMap<DeviceKey<'_>, usize> = HashMap::new();

    for row in records {
        if row.model_name.is_empty() || !matches_query(row, &q) {
            continue;
        }

        let idx = *by_key.entry(device_key(row)).or_insert_with(|| {
            out.push(Device {
                brand_name: row.brand_title.clone(),
                phone_name: row.model_name.clone(),
                codename: row.codename(),
                models: ModelMap::new(),
                dtype: row.dtype.clone(),
                brand: row.brand.clone(),
            });
            out.len() - 1
        });
        out[idx].models.record_row(row);
    }
    out
}

/// Distinct devices, counted the way [`search_devices`] groups them.
pub fn count_devices(records: &[DeviceRecord]) -> usize {
    records
        .iter()
        .filter(|row| !row.model_name.is_empty())
        .map(device_key)
        .collect::<HashSet<_>>()
        .len()
}

impl DeviceSearch for Dataset {
    fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_rows: self.total_rows,
            valid_rows: self.records.len(),
            malformed_rows: self.malformed.len(),
            brands: list_brands(&self.records).len(),
            devices: count_devices(&self.records),
        }
    }

    fn brands(&self) -> Vec<Brand> {
        list_brands(&self.records)
    }

    fn search(&self, query: &str) -> Vec<Device> {
        search_devices(&self.records, query)
    }

    fn brand_tree(&self, brand_id: &str) -> Option<BrandTree> {
        build_brand_tree(&self.records, brand_id)
    }
}
