// crates/devicedb-core/src/model/brand.rs
use serde::Serialize;

/// Display names for well-known brand codes, keyed by lowercased code.
pub const BRAND_DISPLAY_NAMES: [(&str, &str); 13] = [
    ("apple", "苹果(Apple)"),
    ("asus", "华硕(Asus)"),
    ("blackshark", "黑鲨"),
    ("google", "谷歌(Google)"),
    ("huawei", "华为"),
    ("meizu", "魅族"),
    ("xiaomi", "小米"),
    ("mitv", "小米电视"),
    ("motorola", "摩托罗拉(Motorola)"),
    ("oneplus", "一加"),
    ("realme", "真我"),
    ("samsung", "三星(Samsung)"),
    ("honor", "荣耀"),
];

/// A brand entry of the brand listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Brand {
    /// Same as `brand`; the deduplication key.
    pub id: String,
    /// Display name.
    pub name: String,
    pub brand: String,
    pub brand_title: String,
}

impl Brand {
    pub fn new(brand: &str, brand_title: &str) -> Self {
        Self {
            id: brand.to_string(),
            name: display_brand_name(brand, brand_title),
            brand: brand.to_string(),
            brand_title: brand_title.to_string(),
        }
    }
}

/// Localized name for `brand`, or `brand_title` when the code is not known.
pub fn display_brand_name(brand: &str, brand_title: &str) -> String {
    let key = brand.to_lowercase();
    BRAND_DISPLAY_NAMES
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| brand_title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_case_insensitive() {
        assert_eq!(display_brand_name("Xiaomi", "Xiaomi Inc."), "小米");
        assert_eq!(display_brand_name("SAMSUNG", "Samsung"), "三星(Samsung)");
    }

    #[test]
    fn unknown_codes_fall_back_to_title() {
        assert_eq!(display_brand_name("nothing", "Nothing"), "Nothing");
        assert_eq!(Brand::new("vivo", "vivo").name, "vivo");
    }
}
