// crates/devicedb-core/src/brands.rs
use crate::model::{Brand, DeviceRecord};
use std::collections::HashMap;

/// Deduplicated brand listing.
///
/// Keeps the position of a brand's first row and the title of its last.
pub fn list_brands(records: &[DeviceRecord]) -> Vec<Brand> {
    let mut out: Vec<Brand> = Vec::new();
    let mut by_code: HashMap<&str, usize> = HashMap::new();

    for row in records {
        if row.brand.is_empty() || row.brand_title.is_empty() {
            continue;
        }
        let brand = Brand::new(&row.brand, &row.brand_title);
        match by_code.get(row.brand.as_str()) {
            Some(&idx) => out[idx] = brand,
            None => {
                by_code.insert(row.brand.as_str(), out.len());
                out.push(brand);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn row(brand: &str, title: &str) -> DeviceRecord {
        DeviceRecord {
            brand: brand.into(),
            brand_title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn one_entry_per_brand_in_first_seen_order() {
        let rows = [
            row("xiaomi", "小米"),
            row("apple", "Apple"),
            row("xiaomi", "小米"),
            row("nothing", "Nothing"),
        ];
        let brands = list_brands(&rows);
        let ids: Vec<_> = brands.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["xiaomi", "apple", "nothing"]);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn last_title_wins_but_position_is_kept() {
        let rows = [
            row("nothing", "Nothing"),
            row("apple", "Apple"),
            row("nothing", "Nothing Technology"),
        ];
        let brands = list_brands(&rows);
        assert_eq!(brands[0].id, "nothing");
        assert_eq!(brands[0].brand_title, "Nothing Technology");
        assert_eq!(brands[0].name, "Nothing Technology");
    }

    #[test]
    fn known_codes_use_display_names() {
        let brands = list_brands(&[row("apple", "Apple")]);
        assert_eq!(brands[0].name, "苹果(Apple)");
        assert_eq!(brands[0].brand, "apple");
    }

    #[test]
    fn rows_without_title_are_skipped() {
        let brands = list_brands(&[row("apple", ""), row("", "Apple")]);
        assert!(brands.is_empty());
    }
}
