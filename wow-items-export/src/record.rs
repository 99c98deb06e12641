//! Mapping items to flat, string-valued output rows.

use wow_items_core::{Item, slugify};

use crate::column::{Column, ColumnSpec};

/// One CSV row derived from an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub id: String,
    pub name: String,
    /// `None` when the export doesn't include slugs.
    pub name_slug: Option<String>,
    pub class: String,
    pub subclass: String,
    pub slot: String,
    pub quality: String,
    pub icon_url: String,
}

impl Record {
    /// Copy an item's fields verbatim. The slug of an empty name is empty.
    pub fn from_item(item: &Item, include_slug: bool) -> Self {
        Self {
            id: item.item_id.to_string(),
            name: item.name.clone(),
            name_slug: include_slug.then(|| slugify(&item.name, true)),
            class: item.class.clone(),
            subclass: item.subclass.clone(),
            slot: item.slot.clone(),
            quality: item.quality.clone(),
            icon_url: item.icon.clone(),
        }
    }

    /// Value of a single column, or `None` for an absent slug.
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::Id => Some(self.id.as_str()),
            Column::Name => Some(self.name.as_str()),
            Column::NameSlug => self.name_slug.as_deref(),
            Column::Class => Some(self.class.as_str()),
            Column::Subclass => Some(self.subclass.as_str()),
            Column::Slot => Some(self.slot.as_str()),
            Column::Quality => Some(self.quality.as_str()),
            Column::IconUrl => Some(self.icon_url.as_str()),
        }
    }

    pub(crate) fn set(&mut self, column: Column, value: String) {
        match column {
            Column::Id => self.id = value,
            Column::Name => self.name = value,
            Column::NameSlug => self.name_slug = Some(value),
            Column::Class => self.class = value,
            Column::Subclass => self.subclass = value,
            Column::Slot => self.slot = value,
            Column::Quality => self.quality = value,
            Column::IconUrl => self.icon_url = value,
        }
    }

    /// Field values in header order. Missing values are written empty.
    pub fn row<'a>(&'a self, columns: &'a ColumnSpec) -> impl Iterator<Item = &'a str> + 'a {
        columns.columns().map(|c| self.get(c).unwrap_or(""))
    }
}

/// Map every item to a record, preserving order.
pub fn map_items(items: &[Item], include_slug: bool) -> Vec<Record> {
    items
        .iter()
        .map(|item| Record::from_item(item, include_slug))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hearthstone() -> Item {
        Item::new(1, "Hearthstone")
            .with_class("Quest")
            .with_quality("Common")
            .with_icon("inv_misc_hearthstone")
    }

    #[test]
    fn test_from_item_without_slug() {
        let record = Record::from_item(&hearthstone(), false);
        assert_eq!(record.id, "1");
        assert_eq!(record.name, "Hearthstone");
        assert_eq!(record.name_slug, None);
        assert_eq!(record.class, "Quest");
        assert_eq!(record.subclass, "");
        assert_eq!(record.icon_url, "inv_misc_hearthstone");
    }

    #[test]
    fn test_from_item_with_slug() {
        let record = Record::from_item(&Item::new(16908, "Bloodfang Hood"), true);
        assert_eq!(record.name_slug.as_deref(), Some("bloodfang-hood"));
    }

    #[test]
    fn test_empty_name_gives_empty_slug() {
        let record = Record::from_item(&Item::new(5, ""), true);
        assert_eq!(record.name_slug.as_deref(), Some(""));
    }

    #[test]
    fn test_row_follows_spec_order() {
        let record = Record::from_item(&hearthstone(), true);
        let spec = ColumnSpec::standard(true);
        let row: Vec<&str> = record.row(&spec).collect();
        assert_eq!(
            row,
            vec!["1", "Hearthstone", "hearthstone", "Quest", "", "", "Common", "inv_misc_hearthstone"]
        );
    }

    #[test]
    fn test_row_without_slug_value_is_blank() {
        let record = Record::from_item(&hearthstone(), false);
        let spec = ColumnSpec::standard(true);
        let row: Vec<&str> = record.row(&spec).collect();
        assert_eq!(row[2], "");
    }

    #[test]
    fn test_map_items_preserves_order() {
        let items = vec![Item::new(30, "C"), Item::new(10, "A"), Item::new(20, "B")];
        let ids: Vec<String> = map_items(&items, false).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }
}
