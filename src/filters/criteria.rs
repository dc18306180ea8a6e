//! Per-request filter criteria
//!
//! One [`FilterCriteria`] bundles everything a single exploration request
//! can ask for: the structural windows, an optional free-text query and the
//! result cap for fuzzy narrowing.

use crate::filters::{RuntimeRange, SeasonRange};
use crate::search::TOP_RESULTS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter criteria for one exploration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Runtime window for movies. `None` disables movies entirely.
    #[serde(default)]
    pub runtime: Option<RuntimeRange>,

    /// Season window for TV shows. `None` disables TV shows entirely.
    #[serde(default)]
    pub seasons: Option<SeasonRange>,

    /// Free-text query for fuzzy narrowing of the table view.
    #[serde(default)]
    pub query: Option<String>,

    /// Keep at most this many fuzzy matches.
    #[serde(default = "default_top_results")]
    pub top_results: usize,
}

fn default_top_results() -> usize {
    TOP_RESULTS
}

impl FilterCriteria {
    /// Create a new filter criteria builder
    #[must_use]
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// Whether any structural window is active. With none, the session
    /// leaves the catalog unfiltered rather than applying the admit-nothing
    /// contract of [`filter_titles`](crate::filters::filter_titles).
    #[must_use]
    pub const fn has_structural_filters(&self) -> bool {
        self.runtime.is_some() || self.seasons.is_some()
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            runtime: None,
            seasons: None,
            query: None,
            top_results: TOP_RESULTS,
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.runtime {
            Some(window) => writeln!(f, "Movies: {window}")?,
            None => writeln!(f, "Movies: (off)")?,
        }
        match self.seasons {
            Some(window) => writeln!(f, "TV Shows: {window}")?,
            None => writeln!(f, "TV Shows: (off)")?,
        }
        if let Some(query) = &self.query {
            writeln!(f, "Query: {query} (top {})", self.top_results)?;
        }
        Ok(())
    }
}

/// Builder for `FilterCriteria`
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    runtime: Option<RuntimeRange>,
    seasons: Option<SeasonRange>,
    query: Option<String>,
    top_results: Option<usize>,
}

impl FilterCriteriaBuilder {
    /// Enable movies within a runtime window
    #[must_use]
    pub const fn runtime(mut self, window: RuntimeRange) -> Self {
        self.runtime = Some(window);
        self
    }

    /// Enable TV shows within a season window
    #[must_use]
    pub const fn seasons(mut self, window: SeasonRange) -> Self {
        self.seasons = Some(window);
        self
    }

    /// Set the free-text query
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Cap the number of fuzzy matches kept
    #[must_use]
    pub const fn top_results(mut self, top: usize) -> Self {
        self.top_results = Some(top);
        self
    }

    /// Build the `FilterCriteria`
    #[must_use]
    pub fn build(self) -> FilterCriteria {
        FilterCriteria {
            runtime: self.runtime,
            seasons: self.seasons,
            query: self.query,
            top_results: self.top_results.unwrap_or(TOP_RESULTS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_filters() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.has_structural_filters());
        assert!(criteria.query.is_none());
        assert_eq!(criteria.top_results, TOP_RESULTS);
    }

    #[test]
    fn test_builder_sets_windows() {
        let criteria = FilterCriteria::builder()
            .runtime(RuntimeRange::new(0, 120))
            .seasons(SeasonRange::new(1, 6))
            .query("documentary")
            .top_results(10)
            .build();
        assert!(criteria.has_structural_filters());
        assert_eq!(criteria.runtime, Some(RuntimeRange::new(0, 120)));
        assert_eq!(criteria.seasons, Some(SeasonRange::new(1, 6)));
        assert_eq!(criteria.query.as_deref(), Some("documentary"));
        assert_eq!(criteria.top_results, 10);
    }

    #[test]
    fn test_display_marks_disabled_windows() {
        let criteria = FilterCriteria::builder()
            .runtime(RuntimeRange::new(30, 90))
            .build();
        let rendered = criteria.to_string();
        assert!(rendered.contains("Movies: 30..90 min"));
        assert!(rendered.contains("TV Shows: (off)"));
    }

    #[test]
    fn test_criteria_round_trips_through_toml() {
        let criteria = FilterCriteria::builder()
            .runtime(RuntimeRange::new(0, 120))
            .query("space")
            .build();
        let text = toml::to_string(&criteria).unwrap();
        let back: FilterCriteria = toml::from_str(&text).unwrap();
        assert_eq!(back, criteria);
    }
}
