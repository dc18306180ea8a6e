//! Catalog record types
//!
//! A [`Title`] is one row of the catalog. The source data overloads a single
//! numeric `duration` column (minutes for movies, seasons for TV shows); in
//! memory that split is explicit, so nothing downstream ever interprets a
//! number against the wrong unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type of a catalog title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Movie,
    TvShow,
}

impl MediaType {
    /// Parse the catalog's `type` column. Accepts `Movie` and `TV Show`,
    /// case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" => Some(Self::Movie),
            "tv show" => Some(Self::TvShow),
            _ => None,
        }
    }

    /// Display form used in tables, matching the source data spelling.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single catalog entry.
///
/// Descriptive fields are plain strings and may be empty; a missing value in
/// the source file never fails the load. `country_code` holds zero or more
/// comma-separated ISO 3166-1 alpha-3 codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub show_id: String,
    pub media_type: MediaType,
    pub title: String,
    pub description: String,
    pub cast: String,
    pub director: String,
    pub country: String,
    pub country_code: String,
    pub release_year: u16,
    /// Runtime in minutes. Populated for movies only.
    pub runtime_minutes: Option<u32>,
    /// Season count. Populated for TV shows only.
    pub seasons: Option<u32>,
    pub listed_in: String,
}

impl Title {
    /// Display form of the duration, `"98 min"` or `"3 Seasons"`.
    /// Empty when the source row carried no usable number.
    #[must_use]
    pub fn duration_label(&self) -> String {
        match (self.media_type, self.runtime_minutes, self.seasons) {
            (MediaType::Movie, Some(m), _) => format!("{m} min"),
            (MediaType::TvShow, _, Some(1)) => "1 Season".to_string(),
            (MediaType::TvShow, _, Some(n)) => format!("{n} Seasons"),
            _ => String::new(),
        }
    }

    /// The alpha-3 tokens of `country_code`, trimmed, empties skipped.
    pub fn country_tokens(&self) -> impl Iterator<Item = &str> {
        self.country_code
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Whether this title was produced in `code`.
    ///
    /// Token equality, case-insensitive. A title listing `"USA, FRA"` was
    /// produced in USA and FRA and nowhere else; codes never match across
    /// token boundaries.
    #[must_use]
    pub fn produced_in(&self, code: &str) -> bool {
        self.country_tokens().any(|t| t.eq_ignore_ascii_case(code))
    }

    /// The composite document fuzzy search ranks against.
    #[must_use]
    pub fn search_document(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            self.title, self.description, self.director, self.cast
        )
    }
}
