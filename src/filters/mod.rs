//! Structural title filtering
//!
//! Movies are admitted by a runtime window in minutes, TV shows by a season
//! window. A media type with no window is excluded entirely, so calling with
//! neither window admits nothing. These are the pure building blocks; the
//! session layer decides when filtering is active at all.

pub mod criteria;

pub use criteria::{FilterCriteria, FilterCriteriaBuilder};

use crate::catalog::{MediaType, Title};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default runtime window applied when movies are enabled without an
/// explicit range.
pub const RUNTIME_DEFAULT: RuntimeRange = RuntimeRange { min: 0, max: 120 };

/// Full extent of the runtime selector. Requested windows are clamped here.
pub const RUNTIME_SPAN: RuntimeRange = RuntimeRange { min: 0, max: 300 };

/// Default season window applied when TV shows are enabled without an
/// explicit range.
pub const SEASONS_DEFAULT: SeasonRange = SeasonRange { min: 1, max: 6 };

/// Full extent of the season selector. Requested windows are clamped here.
pub const SEASONS_SPAN: SeasonRange = SeasonRange { min: 1, max: 25 };

/// Failure to read a `MIN..MAX` window from the command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("expected MIN..MAX, got '{0}'")]
    Syntax(String),
    #[error("range bound is not a number: '{0}'")]
    Bound(String),
}

fn parse_window(value: &str) -> Result<(u32, u32), RangeParseError> {
    let (lo, hi) = value
        .split_once("..")
        .ok_or_else(|| RangeParseError::Syntax(value.to_string()))?;
    let min = lo
        .trim()
        .parse()
        .map_err(|_| RangeParseError::Bound(lo.trim().to_string()))?;
    let max = hi
        .trim()
        .parse()
        .map_err(|_| RangeParseError::Bound(hi.trim().to_string()))?;
    Ok((min, max))
}

/// Inclusive runtime window over movie lengths, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeRange {
    pub min: u32,
    pub max: u32,
}

impl RuntimeRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `minutes` falls inside the window. An inverted window
    /// contains nothing.
    #[must_use]
    pub const fn contains(self, minutes: u32) -> bool {
        self.min <= minutes && minutes <= self.max
    }

    /// This window restricted to the bounds of `span`.
    #[must_use]
    pub const fn clamp_to(self, span: Self) -> Self {
        Self {
            min: if self.min < span.min { span.min } else { self.min },
            max: if self.max > span.max { span.max } else { self.max },
        }
    }
}

impl fmt::Display for RuntimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} min", self.min, self.max)
    }
}

impl FromStr for RuntimeRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = parse_window(s)?;
        Ok(Self { min, max })
    }
}

/// Inclusive window over TV show season counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRange {
    pub min: u32,
    pub max: u32,
}

impl SeasonRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `seasons` falls inside the window. An inverted window
    /// contains nothing.
    #[must_use]
    pub const fn contains(self, seasons: u32) -> bool {
        self.min <= seasons && seasons <= self.max
    }

    /// This window restricted to the bounds of `span`.
    #[must_use]
    pub const fn clamp_to(self, span: Self) -> Self {
        Self {
            min: if self.min < span.min { span.min } else { self.min },
            max: if self.max > span.max { span.max } else { self.max },
        }
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} seasons", self.min, self.max)
    }
}

impl FromStr for SeasonRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = parse_window(s)?;
        Ok(Self { min, max })
    }
}

/// Keep the titles admitted by the given windows, preserving input order.
///
/// A movie passes iff `runtime` is present and its runtime falls inside it;
/// a TV show passes iff `seasons` is present and its season count falls
/// inside it. A title whose own duration value is missing never passes a
/// bound check.
#[must_use]
pub fn filter_titles(
    titles: &[Title],
    runtime: Option<RuntimeRange>,
    seasons: Option<SeasonRange>,
) -> Vec<Title> {
    titles
        .iter()
        .filter(|t| passes(t, runtime, seasons))
        .cloned()
        .collect()
}

fn passes(title: &Title, runtime: Option<RuntimeRange>, seasons: Option<SeasonRange>) -> bool {
    match title.media_type {
        MediaType::Movie => runtime.is_some_and(|window| {
            title
                .runtime_minutes
                .is_some_and(|minutes| window.contains(minutes))
        }),
        MediaType::TvShow => seasons
            .is_some_and(|window| title.seasons.is_some_and(|count| window.contains(count))),
    }
}

/// Keep the titles produced in any of the selected countries, preserving
/// input order. An empty selection keeps everything.
#[must_use]
pub fn filter_by_countries(titles: &[Title], selected: &BTreeSet<String>) -> Vec<Title> {
    if selected.is_empty() {
        return titles.to_vec();
    }
    titles
        .iter()
        .filter(|t| selected.iter().any(|code| t.produced_in(code)))
        .cloned()
        .collect()
}
