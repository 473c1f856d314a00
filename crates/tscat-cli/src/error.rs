//! Command error types using thiserror.

use std::path::PathBuf;

/// Errors reported by CLI commands.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] tscat_common::TsCatError),

    /// Catalog error.
    #[error(transparent)]
    Catalog(#[from] tscat_catalog::CatalogError),

    /// One or more catalogs did not survive a round trip.
    #[error("{failed} of {total} catalogs failed the round-trip check")]
    CheckFailed {
        /// Number of failing files.
        failed: usize,
        /// Number of checked files.
        total: usize,
    },

    /// Refused to overwrite an existing file.
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    /// JSON output failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
