use thiserror::Error;

/// Errors that can occur while enumerating an item source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing file could not be read.
    #[error("Item source unavailable at {path}: {source}")]
    Unavailable {
        path: String,
        source: std::io::Error,
    },

    /// The file is not a valid JSON item list.
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    /// The file is not a valid YAML item list.
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },

    /// File extension does not map to a known item format.
    #[error("Unsupported item source format: {0}")]
    UnsupportedFormat(String),
}

impl SourceError {
    pub fn unsupported_format(path: impl Into<String>) -> Self {
        Self::UnsupportedFormat(path.into())
    }
}
