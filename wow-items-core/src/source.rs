//! Item sources: anything that can enumerate a finite collection of items.
//!
//! The exporter only needs a fully materialized `Vec<Item>`, so a source
//! hands over everything at once. In-memory collections are sources as-is;
//! [`FileSource`] reads a dump of the item database from JSON or YAML.

use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::item::Item;

/// A deterministic, finite collection of items.
pub trait ItemSource {
    /// Human-readable description of where the items come from.
    fn name(&self) -> String;

    /// Enumerate every item, in source order.
    fn items(&self) -> Result<Vec<Item>, SourceError>;
}

impl ItemSource for [Item] {
    fn name(&self) -> String {
        "in-memory items".to_string()
    }

    fn items(&self) -> Result<Vec<Item>, SourceError> {
        Ok(self.to_vec())
    }
}

impl ItemSource for Vec<Item> {
    fn name(&self) -> String {
        self.as_slice().name()
    }

    fn items(&self) -> Result<Vec<Item>, SourceError> {
        self.as_slice().items()
    }
}

/// On-disk encodings of an item dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// A JSON array of items (the upstream database layout).
    Json,
    /// A YAML sequence of items.
    Yaml,
}

impl SourceFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Items stored in a single JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: SourceFormat,
}

impl FileSource {
    /// Create a source for `path`, detecting the format from its extension.
    ///
    /// The file itself is not touched until [`ItemSource::items`] is called.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let format = SourceFormat::from_path(&path)
            .ok_or_else(|| SourceError::unsupported_format(path.display().to_string()))?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }
}

impl ItemSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn items(&self) -> Result<Vec<Item>, SourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Unavailable {
            path: self.path.display().to_string(),
            source: e,
        })?;
        let items = parse_items(&contents, self.format, &self.path.display().to_string())?;
        log::debug!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }
}

/// Load every item from a JSON or YAML file.
pub fn load_items(path: &Path) -> Result<Vec<Item>, SourceError> {
    FileSource::open(path)?.items()
}

/// Parse an item dump from a string. `origin` is only used in error messages.
pub fn parse_items(
    content: &str,
    format: SourceFormat,
    origin: &str,
) -> Result<Vec<Item>, SourceError> {
    match format {
        SourceFormat::Json => serde_json::from_str(content).map_err(|e| SourceError::Json {
            path: origin.to_string(),
            source: e,
        }),
        SourceFormat::Yaml => serde_yml::from_str(content).map_err(|e| SourceError::Yaml {
            path: origin.to_string(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("items.json")),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("data/items.YML")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("items.csv")), None);
        assert_eq!(SourceFormat::from_path(Path::new("items")), None);
    }

    #[test]
    fn test_open_rejects_unknown_extension() {
        let err = FileSource::open("items.txt").unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_vec_source_preserves_order() {
        let items = vec![Item::new(3, "C"), Item::new(1, "A"), Item::new(2, "B")];
        let ids: Vec<u32> = items.items().unwrap().iter().map(|i| i.item_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_yaml_sequence() {
        let yaml = "\
- itemId: 1
  name: Hearthstone
  class: Quest
  quality: Common
  icon: inv_misc_hearthstone
- itemId: 2
  name: Bloodfang Hood
";
        let items = parse_items(yaml, SourceFormat::Yaml, "inline").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].icon, "inv_misc_hearthstone");
        assert_eq!(items[1].class, "");
    }

    #[test]
    fn test_parse_json_error_names_origin() {
        let err = parse_items("{not json", SourceFormat::Json, "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
