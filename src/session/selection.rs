//! Country selection reducer
//!
//! The selection is an ordered set of alpha-3 codes, always a subset of the
//! countries participating in the current aggregate. All transitions go
//! through [`reduce`], a pure function over the current selection, one event
//! and the aggregate the event was issued against.

use crate::aggregate::CountryAggregate;
use crate::countries;
use std::collections::BTreeSet;
use tracing::debug;

/// Ordered set of selected alpha-3 codes.
pub type Selection = BTreeSet<String>;

/// One selection transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Toggle one country in or out of the selection.
    Toggle(String),
    /// Select every participating country.
    SelectAll,
    /// Empty the selection.
    Clear,
}

/// Apply one event to a selection.
///
/// Toggling a selected code removes it. Toggling an unselected code inserts
/// it only when the code participates (count > 0) in `aggregates`; anything
/// else, including codes from outside the universe, is a no-op. `SelectAll`
/// replaces the selection with all participating codes and `Clear` empties
/// it. Never fails.
#[must_use]
pub fn reduce(
    current: &Selection,
    event: SelectionEvent,
    aggregates: &[CountryAggregate],
) -> Selection {
    match event {
        SelectionEvent::Toggle(code) => {
            let code = countries::normalize(&code);
            let mut next = current.clone();
            if next.remove(&code) {
                return next;
            }
            if participates(aggregates, &code) {
                next.insert(code);
            } else {
                debug!(code, "toggle ignored, country not in current aggregate");
            }
            next
        }
        SelectionEvent::SelectAll => aggregates
            .iter()
            .filter(|a| a.participates())
            .map(|a| a.code.to_string())
            .collect(),
        SelectionEvent::Clear => Selection::new(),
    }
}

fn participates(aggregates: &[CountryAggregate], code: &str) -> bool {
    aggregates.iter().any(|a| a.code == code && a.participates())
}
