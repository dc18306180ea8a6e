//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the pipeline against the loaded catalog.

pub mod completions;
pub mod countries;
pub mod map;
pub mod search;
pub mod table;

// Re-export execute functions for convenience
pub use completions::execute as generate_completions;
pub use countries::execute as list_countries;
pub use map::execute as map;
pub use search::execute as search;
pub use table::execute as table;

use crate::cli::WindowArgs;
use crate::filters::FilterCriteria;

/// Build filter criteria from the parsed window flags and table options.
pub(crate) fn criteria(
    windows: &WindowArgs,
    query: Option<String>,
    top: Option<usize>,
) -> FilterCriteria {
    let (runtime, seasons) = windows.windows();
    let mut builder = FilterCriteria::builder();
    if let Some(window) = runtime {
        builder = builder.runtime(window);
    }
    if let Some(window) = seasons {
        builder = builder.seasons(window);
    }
    if let Some(text) = query {
        builder = builder.query(text);
    }
    if let Some(k) = top {
        builder = builder.top_results(k);
    }
    builder.build()
}
