//! Search command - fuzzy search over the whole catalog

use crate::{ReelmapError, catalog::Catalog, output, search};

type Result<T> = std::result::Result<T, ReelmapError>;

/// Execute the search command
///
/// Ranks every catalog title against the query and prints the best matches,
/// best first.
///
/// # Errors
/// Returns an error if JSON serialization or terminal output fails.
pub fn execute(catalog: &Catalog, query: &str, top: usize, json: bool, quiet: bool) -> Result<()> {
    let hits = search::search(catalog.titles(), query, top);

    if json {
        println!("{}", serde_json::to_string_pretty(&output::table_entries(&hits))?);
        return Ok(());
    }

    if !quiet {
        println!(
            "{}",
            output::heading(&format!("{} matches for '{query}'", hits.len()))
        );
    }
    for title in &hits {
        println!("{}", output::row_line(&output::table_row(title)));
    }
    Ok(())
}
