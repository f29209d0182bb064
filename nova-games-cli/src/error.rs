use nova_games_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be loaded
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Catalog loaded but failed integrity checks
    #[error("Catalog has {0} problem(s)")]
    InvalidCatalog(usize),

    /// No game with the requested id
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Category not present in the catalog
    #[error("Unknown category: {name} (available: {available})")]
    UnknownCategory { name: String, available: String },

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn unknown_game(id: impl Into<String>) -> Self {
        Self::UnknownGame(id.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
