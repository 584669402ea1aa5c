// crates/devicedb-core/src/model/device.rs
use super::record::DeviceRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key used in a [`ModelMap`] for rows that carry a model but no `ver_name`.
pub const DEFAULT_MODEL_KEY: &str = "型号";

/// A device as returned by search.
///
/// Rows sharing `(brand, dtype, model_name)` collapse into one `Device`;
/// their variants end up in [`Device::models`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// `brand_title` of the first matching row.
    pub brand_name: String,
    /// The shared `model_name`.
    pub phone_name: String,
    pub codename: String,
    /// Variant label -> model identifier.
    pub models: ModelMap,
    pub dtype: String,
    pub brand: String,
}

/// Ordered `variant -> model` map.
///
/// A list of pairs in insertion order rather than a `HashMap`; re-inserting
/// a key replaces the value but keeps its position. Serializes as a JSON
/// object in that same order, integer-like keys (`"2023"`) included; they
/// are not moved ahead of the others.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelMap(Vec<(String, String)>);

impl ModelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Records the variant carried by `row`, if it has one.
    pub(crate) fn record_row(&mut self, row: &DeviceRecord) {
        if let Some((key, value)) = row.model_entry() {
            self.insert(key, value);
        }
    }
}

impl Serialize for ModelMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl DeviceRecord {
    /// `code`, or `"code / code_alias"` when the alias differs.
    ///
    /// An alias without a code stands on its own.
    pub fn codename(&self) -> String {
        combine_codename(&self.code, &self.code_alias)
    }

    /// The `(variant, model)` pair this row contributes to a [`ModelMap`].
    ///
    /// Rows with a `ver_name` map it to `model` (or `code` if the model is
    /// empty); rows without one file their model under [`DEFAULT_MODEL_KEY`].
    /// Rows with neither contribute nothing.
    pub fn model_entry(&self) -> Option<(&str, &str)> {
        if !self.ver_name.is_empty() {
            let value = if !self.model.is_empty() {
                &self.model
            } else {
                &self.code
            };
            Some((self.ver_name.as_str(), value.as_str()))
        } else if !self.model.is_empty() {
            Some((DEFAULT_MODEL_KEY, self.model.as_str()))
        } else {
            None
        }
    }
}

pub fn combine_codename(code: &str, alias: &str) -> String {
    if alias.is_empty() || alias == code {
        code.to_string()
    } else if code.is_empty() {
        alias.to_string()
    } else {
        format!("{code} / {alias}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(model: &str, code: &str, ver: &str) -> DeviceRecord {
        DeviceRecord {
            model: model.into(),
            code: code.into(),
            ver_name: ver.into(),
            ..Default::default()
        }
    }

    #[test]
    fn codename_combinations() {
        assert_eq!(combine_codename("ABC", "ABC"), "ABC");
        assert_eq!(combine_codename("ABC", "XYZ"), "ABC / XYZ");
        assert_eq!(combine_codename("", "XYZ"), "XYZ");
        assert_eq!(combine_codename("ABC", ""), "ABC");
        assert_eq!(combine_codename("", ""), "");
    }

    #[test]
    fn model_entry_prefers_version_then_default_key() {
        assert_eq!(row("M1", "c", "CN").model_entry(), Some(("CN", "M1")));
        assert_eq!(row("", "c", "CN").model_entry(), Some(("CN", "c")));
        assert_eq!(row("", "", "CN").model_entry(), Some(("CN", "")));
        assert_eq!(
            row("M1", "c", "").model_entry(),
            Some((DEFAULT_MODEL_KEY, "M1"))
        );
        assert_eq!(row("", "c", "").model_entry(), None);
    }

    #[test]
    fn model_map_overwrites_in_place() {
        let mut map = ModelMap::new();
        assert_eq!(map.insert("CN", "A"), None);
        map.insert("Global", "B");
        assert_eq!(map.insert("CN", "C"), Some("A".to_string()));
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("CN", "C"), ("Global", "B")]);
    }

    #[test]
    fn model_map_serializes_in_insertion_order() {
        let mut models = ModelMap::new();
        models.insert("国行版", "A");
        models.insert("2023", "B");
        models.insert("国际版", "C");
        let json = serde_json::to_string(&models).unwrap();
        assert_eq!(json, r#"{"国行版":"A","2023":"B","国际版":"C"}"#);
    }

    #[test]
    fn device_serializes_with_wire_names() {
        let mut models = ModelMap::new();
        models.insert("国行版", "2211133C");
        let device = Device {
            brand_name: "小米".into(),
            phone_name: "Xiaomi 13".into(),
            codename: "fuxi".into(),
            models,
            dtype: "mob".into(),
            brand: "xiaomi".into(),
        };
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["brandName"], "小米");
        assert_eq!(json["phoneName"], "Xiaomi 13");
        assert_eq!(json["models"]["国行版"], "2211133C");
    }
}
