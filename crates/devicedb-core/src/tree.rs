// crates/devicedb-core/src/tree.rs
use crate::kind::DeviceKind;
use crate::model::{BrandAbout, BrandTree, DeviceRecord, ModelMap, PhoneDetails, PhoneEntry};
use std::collections::HashMap;

/// Groups the rows of one brand by model name.
///
/// `about` comes from the brand's first row. `None` if the brand has no rows.
pub fn build_brand_tree(records: &[DeviceRecord], brand_id: &str) -> Option<BrandTree> {
    let mut rows = records.iter().filter(|row| row.brand == brand_id).peekable();

    let about = {
        let first = rows.peek()?;
        BrandAbout {
            brand: first.brand.clone(),
            brand_zh: first.brand_title.clone(),
            sub_brand: first.brand.clone(),
            sub_brand_zh: first.brand_title.clone(),
            kind: DeviceKind::Phone,
        }
    };

    let mut phones: Vec<PhoneEntry> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        if row.model_name.is_empty() {
            continue;
        }
        let idx = *by_name.entry(row.model_name.as_str()).or_insert_with(|| {
            phones.push(PhoneEntry {
                name: row.model_name.clone(),
                details: PhoneDetails {
                    codename: row.codename(),
                    model: ModelMap::new(),
                    dtype: row.dtype.clone(),
                },
            });
            phones.len() - 1
        });
        phones[idx].details.model.record_row(row);
    }

    Some(BrandTree { about, phones })
}
