//! CSV export of item records.
//!
//! Items are mapped one-to-one into flat string [`Record`]s, then written in
//! a single batch under a header defined by a [`ColumnSpec`]. An optional
//! `name_slug` column carries a slugified item name.

pub mod column;
pub mod error;
pub mod export;
pub mod record;
pub mod settings;

pub use column::{Column, ColumnSpec};
pub use error::{ExportError, SettingsError};
pub use export::{
    DEFAULT_OUTPUT_PATH, ExportConfig, export, export_from_source, read_records, write_records,
};
pub use record::{Record, map_items};
pub use settings::{ConfigOverrides, ResolvedConfig, Settings, ValueSource};
