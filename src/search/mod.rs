//! Fuzzy free-text search over titles
//!
//! Ranks every title's composite document (title, description, director and
//! cast, newline-joined) against a query and keeps the best matches. Scoring
//! carries the row position through ranking, so two records sharing a title
//! string stay distinct all the way to the result.

use crate::catalog::Title;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use rayon::prelude::*;
use tracing::debug;

/// Default cap on fuzzy results.
pub const TOP_RESULTS: usize = 40;

/// Score every title against `query`.
///
/// Returns `(row, score)` pairs for rows whose composite document matches,
/// sorted by descending score with ties in row order. Rows with no match at
/// all are absent. An empty or whitespace query matches nothing here; the
/// identity shortcut lives in [`search`].
#[must_use]
pub fn rank(titles: &[Title], query: &str) -> Vec<(usize, i64)> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut ranked: Vec<(usize, i64)> = titles
        .par_iter()
        .enumerate()
        .filter_map(|(row, title)| {
            matcher
                .fuzzy_match(&title.search_document(), query)
                .map(|score| (row, score))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// The best `top_k` fuzzy matches for `query`, best first.
///
/// An empty or whitespace query returns the input unchanged, regardless of
/// `top_k`. The result never exceeds `min(top_k, titles.len())` entries.
#[must_use]
pub fn search(titles: &[Title], query: &str, top_k: usize) -> Vec<Title> {
    if query.trim().is_empty() {
        return titles.to_vec();
    }

    let mut ranked = rank(titles, query);
    ranked.truncate(top_k);
    debug!(query, matches = ranked.len(), "fuzzy search");
    ranked
        .into_iter()
        .map(|(row, _)| titles[row].clone())
        .collect()
}
