//! Error types for catalog operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading translation catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document is not well-formed XML or does not follow the `.ts` schema
    #[error("Malformed translation catalog at byte {position}: {message}")]
    Parse { position: u64, message: String },

    /// No catalog file exists for the requested locale
    #[error("No translation catalog for locale '{locale}' (searched {})", display_paths(.searched))]
    MissingLocale {
        locale: String,
        searched: Vec<PathBuf>,
    },

    /// A locale tag could not be parsed
    #[error("Invalid locale tag: {0}")]
    InvalidLocale(String),

    /// Reading or writing a catalog file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Builds a parse error at the given byte position
    pub fn parse(position: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Whether a caller can keep going with an identity catalog.
    ///
    /// Only an invalid locale tag is a caller mistake; everything else is a
    /// property of the files on disk.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidLocale(_))
    }
}

impl From<CatalogError> for tscat_common::TsCatError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Io { source, .. } => Self::Io(source),
            other => Self::Catalog(other.to_string()),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
