//! Reelmap - explore a movie and TV catalog by country of production
//!
//! This library implements the exploration pipeline behind the `reelmap`
//! binary: a flat catalog of titles is turned into per-country production
//! counts for map display and into filtered, fuzzy-searchable title sets for
//! tabular display.
//!
//! The pipeline stages are pure and composable:
//!
//! - [`catalog`] loads the immutable title catalog from CSV, once.
//! - [`countries`] embeds the ISO 3166-1 alpha-3 universe the map covers.
//! - [`aggregate`] counts titles per country and samples hover labels.
//! - [`filters`] admits titles by runtime and season windows.
//! - [`search`] ranks titles against a free-text query.
//! - [`session`] threads filtered state and the country selection through
//!   one exploration, with no process-global state.
//! - [`output`] shapes the map, table and tooltip feeds a renderer consumes.

use thiserror::Error;

pub mod aggregate;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod countries;
pub mod filters;
pub mod output;
pub mod search;
pub mod session;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ReelmapError {
    /// Catalog loading error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<filters::RangeParseError> for ReelmapError {
    fn from(err: filters::RangeParseError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
