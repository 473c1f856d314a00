//! Common type definitions shared across the workspace.

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, TsCatError>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum TsCatError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Translation catalog error.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TsCatError {
    /// Builds a configuration error from anything displayable.
    pub fn config(message: impl std::fmt::Display) -> Self {
        Self::Config(message.to_string())
    }
}
