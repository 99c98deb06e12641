use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Item source could not be opened or read
    #[error("Source error: {0}")]
    ItemSource(String),

    /// Writing or reading the CSV failed
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn item_source(msg: impl Into<String>) -> Self {
        Self::ItemSource(msg.into())
    }

    pub(crate) fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
