//! The item record as supplied by the item database.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A single game item, read-only once loaded.
///
/// Field names follow the upstream item database layout (`itemId`, `name`,
/// `class`, ...). Keys the exporter doesn't use are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier within the source collection. Accepts an integer or
    /// a string of digits; anything outside `0..=u32::MAX` is rejected.
    #[serde(deserialize_with = "deserialize_item_id")]
    pub item_id: u32,
    #[serde(default, deserialize_with = "stringify")]
    pub name: String,
    /// Item category (e.g., "Armor", "Quest")
    #[serde(default, deserialize_with = "stringify")]
    pub class: String,
    /// Item subcategory (e.g., "Leather")
    #[serde(default, deserialize_with = "stringify")]
    pub subclass: String,
    /// Equip slot (e.g., "Head")
    #[serde(default, deserialize_with = "stringify")]
    pub slot: String,
    /// Rarity tier (e.g., "Common", "Epic")
    #[serde(default, deserialize_with = "stringify")]
    pub quality: String,
    /// Icon reference (e.g., "inv_misc_hearthstone")
    #[serde(default, deserialize_with = "stringify")]
    pub icon: String,
}

impl Item {
    pub fn new(item_id: u32, name: impl Into<String>) -> Self {
        Self {
            item_id,
            name: name.into(),
            class: String::new(),
            subclass: String::new(),
            slot: String::new(),
            quality: String::new(),
            icon: String::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_subclass(mut self, subclass: impl Into<String>) -> Self {
        self.subclass = subclass.into();
        self
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Scalar values the item database may hold in a text field.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    UInt(u64),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Accept any scalar for a text field and keep its string form.
/// `null` becomes the empty string.
fn stringify<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::UInt(n)) => n.to_string(),
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

/// Identifier forms found in item dumps.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    UInt(u64),
    Int(i64),
    Text(String),
}

fn deserialize_item_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawId::deserialize(deserializer)?;
    let parsed = match &raw {
        RawId::UInt(n) => u32::try_from(*n).ok(),
        RawId::Int(n) => u32::try_from(*n).ok(),
        RawId::Text(s) => s.trim().parse::<u32>().ok(),
    };
    parsed.ok_or_else(|| {
        let shown = match raw {
            RawId::UInt(n) => n.to_string(),
            RawId::Int(n) => n.to_string(),
            RawId::Text(s) => format!("\"{s}\""),
        };
        D::Error::custom(format!(
            "itemId {shown} is not an integer between 0 and {}",
            u32::MAX
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_layout() {
        let json = r#"{
            "itemId": 6948,
            "name": "Hearthstone",
            "icon": "inv_misc_rune_01",
            "class": "Miscellaneous",
            "subclass": "Junk",
            "sellPrice": 0,
            "quality": "Common",
            "itemLevel": 1,
            "slot": "Non-equippable"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_id, 6948);
        assert_eq!(item.name, "Hearthstone");
        assert_eq!(item.class, "Miscellaneous");
        assert_eq!(item.slot, "Non-equippable");
        assert_eq!(item.icon, "inv_misc_rune_01");
    }

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let json = r#"{"itemId": 1, "name": "Thing", "slot": null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.slot, "");
        assert_eq!(item.subclass, "");
        assert_eq!(item.quality, "");
    }

    #[test]
    fn test_non_string_fields_are_stringified() {
        let json = r#"{"itemId": 2, "name": 1234, "quality": 4, "class": true}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "1234");
        assert_eq!(item.quality, "4");
        assert_eq!(item.class, "true");
    }

    #[test]
    fn test_item_id_is_required() {
        let json = r#"{"name": "No Id"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_item_id_as_digit_string() {
        let json = r#"{"itemId": "6948", "name": "Hearthstone"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_id, 6948);
    }

    #[test]
    fn test_item_id_out_of_range_is_rejected() {
        for id in ["-5", "4294967296", "\"abc\"", "\"-1\"", "1.5"] {
            let json = format!(r#"{{"itemId": {id}, "name": "Bad"}}"#);
            assert!(serde_json::from_str::<Item>(&json).is_err(), "accepted {id}");
        }
        let err = serde_json::from_str::<Item>(r#"{"itemId": -5}"#).unwrap_err();
        assert!(err.to_string().contains("itemId -5"));
    }

    #[test]
    fn test_large_and_negative_numbers_keep_their_text() {
        let json = r#"{"itemId": 3, "name": 18446744073709551615, "quality": -5}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "18446744073709551615");
        assert_eq!(item.quality, "-5");
    }

    #[test]
    fn test_builder() {
        let item = Item::new(16908, "Bloodfang Hood")
            .with_class("Armor")
            .with_subclass("Leather")
            .with_slot("Head")
            .with_quality("Epic")
            .with_icon("inv_helmet_41");
        assert_eq!(item.item_id, 16908);
        assert_eq!(item.subclass, "Leather");
        assert_eq!(item.quality, "Epic");
    }
}
