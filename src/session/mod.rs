//! Exploration session management
//!
//! An [`ExploreSession`] holds everything one exploration of the catalog
//! needs: the active filter criteria, the filtered title set, its per-country
//! aggregate and the country selection. There is no process-wide state; two
//! sessions over the same catalog never see each other.
//!
//! # Workflow
//!
//! ```text
//! Session created (unfiltered catalog, empty selection)
//!     ↓
//! apply(criteria)  → refilter, re-aggregate, revalidate selection
//!     ↓
//! toggle / select_all / clear_selection   (reducer over current aggregate)
//!     ↓
//! map feed: aggregates() + summary()      table feed: table_view()
//! ```

pub mod selection;

pub use selection::{Selection, SelectionEvent, reduce};

use crate::aggregate::{self, CountryAggregate};
use crate::catalog::{Catalog, Title};
use crate::filters::{self, FilterCriteria};
use crate::search;
use tracing::debug;

/// One exploration of a loaded catalog.
pub struct ExploreSession<'a> {
    catalog: &'a Catalog,
    criteria: FilterCriteria,
    filtered: Vec<Title>,
    aggregates: Vec<CountryAggregate>,
    selection: Selection,
}

impl<'a> ExploreSession<'a> {
    /// Start a session showing the whole catalog, nothing selected.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut session = Self {
            catalog,
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            aggregates: Vec::new(),
            selection: Selection::new(),
        };
        session.apply(FilterCriteria::default());
        session
    }

    /// Apply new filter criteria.
    ///
    /// Refilters the catalog, rebuilds the per-country aggregate and drops
    /// selected countries that no longer participate. With no structural
    /// window active the catalog passes through unfiltered; that is the
    /// "filters off" position, distinct from two empty windows.
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.filtered = if criteria.has_structural_filters() {
            filters::filter_titles(self.catalog.titles(), criteria.runtime, criteria.seasons)
        } else {
            self.catalog.titles().to_vec()
        };
        self.aggregates = aggregate::aggregate(&self.filtered);
        self.criteria = criteria;

        let before = self.selection.len();
        let participating: Vec<&str> = aggregate::participating_codes(&self.aggregates);
        self.selection
            .retain(|code| participating.contains(&code.as_str()));
        if self.selection.len() < before {
            debug!(
                dropped = before - self.selection.len(),
                "selection pruned to participating countries"
            );
        }
        debug!(titles = self.filtered.len(), "criteria applied");
    }

    /// Toggle one country in or out of the selection.
    pub fn toggle(&mut self, code: &str) {
        self.selection = reduce(
            &self.selection,
            SelectionEvent::Toggle(code.to_string()),
            &self.aggregates,
        );
    }

    /// Select every country participating in the current aggregate.
    pub fn select_all(&mut self) {
        self.selection = reduce(&self.selection, SelectionEvent::SelectAll, &self.aggregates);
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) {
        self.selection = reduce(&self.selection, SelectionEvent::Clear, &self.aggregates);
    }

    /// The titles admitted by the current criteria, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> &[Title] {
        &self.filtered
    }

    /// The per-country aggregate of the filtered titles.
    #[must_use]
    pub fn aggregates(&self) -> &[CountryAggregate] {
        &self.aggregates
    }

    /// The active filter criteria.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current country selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Codes participating in the current aggregate, in table order.
    #[must_use]
    pub fn participating(&self) -> Vec<&'static str> {
        aggregate::participating_codes(&self.aggregates)
    }

    /// Header sentence for the current map feed.
    #[must_use]
    pub fn summary(&self) -> String {
        aggregate::summary_line(&self.aggregates)
    }

    /// The table view: filtered titles restricted to the selected countries,
    /// then fuzzy-narrowed by the criteria's query. Rank order when a query
    /// is active, catalog order otherwise.
    #[must_use]
    pub fn table_view(&self) -> Vec<Title> {
        let scoped = filters::filter_by_countries(&self.filtered, &self.selection);
        let query = self.criteria.query.as_deref().unwrap_or("");
        search::search(&scoped, query, self.criteria.top_results)
    }
}
