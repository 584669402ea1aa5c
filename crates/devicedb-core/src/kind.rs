// crates/devicedb-core/src/kind.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// `dtype` value marking a tablet.
pub const DTYPE_PAD: &str = "pad";
/// `dtype` value marking a phone.
pub const DTYPE_MOB: &str = "mob";

/// Name fragments that mark a tablet when `dtype` says nothing.
const PAD_NAME_MARKERS: [&str; 2] = ["平板", "Pad"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Phone,
    Pad,
}

impl DeviceKind {
    /// Kind named by a `dtype` value, `None` for anything but `pad` / `mob`.
    pub fn from_dtype(dtype: &str) -> Option<Self> {
        match dtype {
            DTYPE_PAD => Some(Self::Pad),
            DTYPE_MOB => Some(Self::Phone),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Pad => "pad",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phone or pad?
///
/// An explicit `dtype` decides; otherwise a name containing `平板` or `Pad`
/// (case-sensitive) is a pad and everything else a phone.
///
/// ```
/// use devicedb_core::{classify_device_type, DeviceKind};
///
/// assert_eq!(classify_device_type("Xiaomi Pad 6", ""), DeviceKind::Pad);
/// assert_eq!(classify_device_type("Xiaomi Pad 6", "mob"), DeviceKind::Phone);
/// assert_eq!(classify_device_type("Xiaomi 14", ""), DeviceKind::Phone);
/// ```
pub fn classify_device_type(device_name: &str, dtype: &str) -> DeviceKind {
    if let Some(kind) = DeviceKind::from_dtype(dtype) {
        return kind;
    }
    if PAD_NAME_MARKERS
        .iter()
        .any(|marker| device_name.contains(marker))
    {
        DeviceKind::Pad
    } else {
        DeviceKind::Phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dtype_takes_priority() {
        assert_eq!(classify_device_type("Generic Phone", "mob"), DeviceKind::Phone);
        assert_eq!(classify_device_type("Generic Phone", "pad"), DeviceKind::Pad);
        assert_eq!(classify_device_type("MatePad 11", "mob"), DeviceKind::Phone);
    }

    #[test]
    fn name_heuristic_when_dtype_unknown() {
        assert_eq!(classify_device_type("Mi Pad 6", ""), DeviceKind::Pad);
        assert_eq!(classify_device_type("小米平板 6 Pro", "tv"), DeviceKind::Pad);
        assert_eq!(classify_device_type("Generic Tablet", ""), DeviceKind::Phone);
        assert_eq!(classify_device_type("iPad Air", "PAD"), DeviceKind::Pad);
    }

    #[test]
    fn heuristic_is_case_sensitive() {
        assert_eq!(classify_device_type("Mi pad 6", ""), DeviceKind::Phone);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DeviceKind::Pad).unwrap(), "\"pad\"");
        assert_eq!(DeviceKind::Phone.to_string(), "phone");
    }
}
