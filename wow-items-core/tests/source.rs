use std::fs;

use tempfile::TempDir;
use wow_items_core::{FileSource, ItemSource, SourceError, load_items};

#[test]
fn load_json_dump() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.json");
    fs::write(
        &path,
        r#"[
  {"itemId": 6948, "name": "Hearthstone", "class": "Miscellaneous", "subclass": "Junk",
   "slot": "Non-equippable", "quality": "Common", "icon": "inv_misc_rune_01", "itemLevel": 1},
  {"itemId": 16908, "name": "Bloodfang Hood", "class": "Armor", "subclass": "Leather",
   "slot": "Head", "quality": "Epic", "icon": "inv_helmet_41"}
]"#,
    )
    .unwrap();

    let items = load_items(&path).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_id, 6948);
    assert_eq!(items[1].name, "Bloodfang Hood");
    assert_eq!(items[1].slot, "Head");
}

#[test]
fn load_yaml_dump() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.yaml");
    fs::write(
        &path,
        r#"
- itemId: 19019
  name: "Thunderfury, Blessed Blade of the Windseeker"
  class: Weapon
  subclass: Sword
  slot: One-Hand
  quality: Legendary
  icon: inv_sword_39
"#,
    )
    .unwrap();

    let source = FileSource::open(&path).unwrap();
    assert_eq!(source.name(), path.display().to_string());
    let items = source.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Thunderfury, Blessed Blade of the Windseeker");
    assert_eq!(items[0].quality, "Legendary");
}

#[test]
fn empty_dump_yields_no_items() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.json");
    fs::write(&path, "[]").unwrap();
    assert!(load_items(&path).unwrap().is_empty());
}

#[test]
fn missing_file_is_unavailable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope.json");
    let err = load_items(&path).unwrap_err();
    assert!(matches!(err, SourceError::Unavailable { .. }));
}

#[test]
fn malformed_json_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.json");
    fs::write(&path, r#"[{"name": "missing id"}]"#).unwrap();
    let err = load_items(&path).unwrap_err();
    assert!(matches!(err, SourceError::Json { .. }));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.yaml");
    fs::write(&path, "- itemId: -5\n  name: Negative\n").unwrap();
    let err = load_items(&path).unwrap_err();
    assert!(matches!(err, SourceError::Yaml { .. }));
    assert!(err.to_string().contains("items.yaml"));
}

#[test]
fn string_item_id_loads_from_yaml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.yml");
    fs::write(&path, "- itemId: \"6948\"\n  name: Hearthstone\n").unwrap();
    let items = load_items(&path).unwrap();
    assert_eq!(items[0].item_id, 6948);
}
