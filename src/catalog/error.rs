//! Catalog loading error types
//!
//! Everything that can go wrong while bringing the catalog into memory.
//! These are startup failures: the catalog either loads completely or not at
//! all. Bad values inside individual descriptive fields are not errors; they
//! degrade to empty values during conversion instead.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog path does not point at a readable file
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No catalog path given on the command line or in the config file
    #[error("No catalog configured. Pass --data <PATH> or set `catalog` in the config file")]
    NotConfigured,

    /// Represents an I/O error while reading the catalog
    #[error("Error while reading catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally malformed CSV (bad quoting, uneven rows, missing header)
    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    /// A row whose `type` column is neither `Movie` nor `TV Show`
    #[error("Line {line}: unknown media type '{value}'")]
    UnknownMediaType { line: u64, value: String },
}
