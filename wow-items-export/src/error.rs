use thiserror::Error;
use wow_items_core::SourceError;

/// Errors that can occur while exporting items to CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The item source couldn't be enumerated.
    #[error("Item source error: {0}")]
    Source(#[from] SourceError),

    /// Creating, writing, or flushing the output file failed.
    /// The file may be left partially written.
    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: csv::Error },

    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: csv::Error },

    /// A CSV being read back has no header matching a requested column.
    #[error("{path} has no '{title}' column")]
    MissingColumn { path: String, title: String },

    /// Two columns share a header title.
    #[error("Column title '{0}' is used more than once")]
    DuplicateTitle(String),
}

/// Errors from loading or resolving export settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An environment variable holds a value that can't be interpreted.
    #[error("Invalid value for ${name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    /// A `[export.titles]` key doesn't name a known column.
    #[error("Unknown column in [export.titles]: {0}")]
    UnknownColumn(String),

    /// `[export.titles]` gives two columns the same header title.
    #[error("Duplicate column title in [export.titles]: {0}")]
    DuplicateTitle(String),
}
