//! In-memory catalog store
//!
//! The catalog is loaded once at startup from a CSV export and is immutable
//! afterwards. Row order is the canonical catalog order; aggregation,
//! filtering and search all see titles in that order, and search carries row
//! positions as stable identities.
//!
//! Loading is all-or-nothing. A missing file, broken CSV structure or an
//! unrecognizable media type aborts the load; missing descriptive values
//! inside a row degrade to empty fields instead.

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{MediaType, Title};

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, CatalogError>;

/// Immutable, in-memory catalog of titles.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    titles: Vec<Title>,
}

/// One raw CSV row, before typing. Field names follow the export's header.
#[derive(Debug, Deserialize)]
struct RawRecord {
    show_id: String,
    #[serde(rename = "type")]
    media_type: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    director: String,
    #[serde(default)]
    cast: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    country_code: String,
    #[serde(default)]
    release_year: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    listed_in: String,
    #[serde(default)]
    description: String,
}

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if `path` is not a readable file,
    /// or a parse error if the file cannot be loaded completely.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let catalog = Self::from_reader(file)?;
        debug!(titles = catalog.len(), path = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    /// Load the catalog from any CSV reader.
    ///
    /// # Errors
    /// Returns an error if the CSV is structurally malformed or a row's
    /// media type is unrecognizable.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut titles = Vec::new();
        for result in rdr.into_records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);
            let raw: RawRecord = record.deserialize(Some(&headers))?;
            titles.push(typed(raw, line)?);
        }
        Ok(Self { titles })
    }

    /// Build a catalog from already-typed records, keeping their order.
    #[must_use]
    pub fn from_titles(titles: Vec<Title>) -> Self {
        Self { titles }
    }

    /// All titles in canonical catalog order.
    #[must_use]
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Type a raw row, degrading unreadable values where the contract allows.
fn typed(raw: RawRecord, line: u64) -> Result<Title> {
    let media_type =
        MediaType::parse(&raw.media_type).ok_or_else(|| CatalogError::UnknownMediaType {
            line,
            value: raw.media_type.clone(),
        })?;

    let release_year = parse_year(&raw.release_year, &raw.show_id);
    let number = leading_number(&raw.duration);
    let (runtime_minutes, seasons) = match media_type {
        MediaType::Movie => (number, None),
        MediaType::TvShow => (None, number),
    };

    Ok(Title {
        show_id: raw.show_id,
        media_type,
        title: raw.title,
        description: raw.description,
        cast: raw.cast,
        director: raw.director,
        country: raw.country,
        country_code: raw.country_code,
        release_year,
        runtime_minutes,
        seasons,
        listed_in: raw.listed_in,
    })
}

fn parse_year(value: &str, show_id: &str) -> u16 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u16>() {
        Ok(year) => year,
        Err(_) => {
            warn!(show_id, value = trimmed, "unreadable release year, keeping 0");
            0
        }
    }
}

/// Leading unsigned number of a duration cell. Accepts bare numbers and
/// annotated forms like `"98 min"` or `"2 Seasons"`.
fn leading_number(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
