//! Per-country production aggregation
//!
//! Turns a title sequence into one row per country in the full ISO 3166-1
//! universe, in canonical table order. Countries with no matching titles are
//! present with a zero count, so a map consumer always has every territory
//! to paint. Each row carries a small sample of matching titles for hover
//! labels.

use crate::catalog::Title;
use crate::countries;
use rayon::prelude::*;
use serde::Serialize;

/// How many matching titles a country row samples for its hover label.
pub const SAMPLE_TITLES: usize = 5;

/// Marker appended to a hover label when the count exceeds the sample.
pub const SAMPLE_MARKER: &str = ", ...";

/// One country row of the map feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryAggregate {
    /// ISO 3166-1 alpha-3 code, from the embedded table.
    pub code: &'static str,
    /// Number of titles produced in this country.
    pub count: usize,
    /// First [`SAMPLE_TITLES`] matching titles, in catalog order.
    pub sample_titles: Vec<String>,
}

impl CountryAggregate {
    /// Whether any title was produced here.
    #[must_use]
    pub const fn participates(&self) -> bool {
        self.count > 0
    }

    /// Hover label: sampled titles joined with `", "`, with
    /// [`SAMPLE_MARKER`] appended when more titles exist than were sampled.
    #[must_use]
    pub fn hover_label(&self) -> String {
        let mut label = self.sample_titles.join(", ");
        if self.count > self.sample_titles.len() {
            label.push_str(SAMPLE_MARKER);
        }
        label
    }
}

/// Aggregate titles per country over the full code universe.
///
/// The result always has exactly [`countries::count()`] rows in canonical
/// table order, regardless of input; an empty input yields all-zero rows.
/// A title listing several production countries is counted once for each.
#[must_use]
pub fn aggregate(titles: &[Title]) -> Vec<CountryAggregate> {
    countries::ALPHA3
        .par_iter()
        .map(|&(code, _)| {
            let mut count = 0;
            let mut sample_titles = Vec::new();
            for title in titles {
                if title.produced_in(code) {
                    count += 1;
                    if sample_titles.len() < SAMPLE_TITLES {
                        sample_titles.push(title.title.clone());
                    }
                }
            }
            CountryAggregate {
                code,
                count,
                sample_titles,
            }
        })
        .collect()
}

/// Codes with at least one matching title, in canonical table order.
#[must_use]
pub fn participating_codes(aggregates: &[CountryAggregate]) -> Vec<&'static str> {
    aggregates
        .iter()
        .filter(|a| a.participates())
        .map(|a| a.code)
        .collect()
}

/// Header sentence for the map view. The total sums per-country counts, so
/// a co-production contributes once per listed country.
#[must_use]
pub fn summary_line(aggregates: &[CountryAggregate]) -> String {
    let total: usize = aggregates.iter().map(|a| a.count).sum();
    format!("Showing {total} Titles by country of production")
}
