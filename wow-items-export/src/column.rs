//! Output columns and the header layout of the CSV.

use std::fmt;
use std::str::FromStr;

/// A column the exporter knows how to fill from an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Id,
    Name,
    /// Slugified name; only present when slugs are enabled.
    NameSlug,
    Class,
    Subclass,
    Slot,
    Quality,
    IconUrl,
}

impl Column {
    /// Every column in output order.
    pub const ALL: [Column; 8] = [
        Column::Id,
        Column::Name,
        Column::NameSlug,
        Column::Class,
        Column::Subclass,
        Column::Slot,
        Column::Quality,
        Column::IconUrl,
    ];

    /// Stable identifier, also the default header title.
    pub fn key(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::NameSlug => "name_slug",
            Column::Class => "class",
            Column::Subclass => "subclass",
            Column::Slot => "slot",
            Column::Quality => "quality",
            Column::IconUrl => "icon_url",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("unknown column '{s}'"))
    }
}

/// Ordered `(column, title)` pairs defining the CSV header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    entries: Vec<(Column, String)>,
}

impl ColumnSpec {
    /// The standard layout: `id, name, [name_slug], class, subclass, slot,
    /// quality, icon_url`, each titled with its key.
    pub fn standard(include_slug: bool) -> Self {
        let entries = Column::ALL
            .into_iter()
            .filter(|c| include_slug || *c != Column::NameSlug)
            .map(|c| (c, c.key().to_string()))
            .collect();
        Self { entries }
    }

    /// Replace the header title of `column`. Columns not in this layout are ignored.
    pub fn with_title(mut self, column: Column, title: impl Into<String>) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == column) {
            entry.1 = title.into();
        }
        self
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, t)| t.as_str())
    }

    pub fn entries(&self) -> &[(Column, String)] {
        &self.entries
    }

    /// The first header title used by more than one column, if any.
    pub fn duplicate_title(&self) -> Option<&str> {
        self.entries
            .iter()
            .enumerate()
            .find(|(i, (_, title))| self.entries[..*i].iter().any(|(_, t)| t == title))
            .map(|(_, (_, title))| title.as_str())
    }

    pub fn contains(&self, column: Column) -> bool {
        self.entries.iter().any(|(c, _)| *c == column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
