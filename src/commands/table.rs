//! Table command - the full pipeline printed as a title table

use crate::{
    ReelmapError, catalog::Catalog, cli::WindowArgs, countries, output, session::ExploreSession,
};
use tracing::warn;

type Result<T> = std::result::Result<T, ReelmapError>;

/// Execute the table command
///
/// Applies the structural windows, toggles the requested countries into the
/// selection (or selects all participating ones), narrows by the fuzzy query
/// and prints the resulting rows. A requested country that does not
/// participate under the current filters is skipped with a warning, matching
/// the no-op contract of the selection reducer.
///
/// # Errors
/// Returns an error if JSON serialization or terminal output fails.
#[allow(clippy::fn_params_excessive_bools)]
pub fn execute(
    catalog: &Catalog,
    windows: &WindowArgs,
    selected: &[String],
    all_countries: bool,
    query: Option<String>,
    top: usize,
    verbose: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let mut session = ExploreSession::new(catalog);
    session.apply(super::criteria(windows, query, Some(top)));

    if all_countries {
        session.select_all();
    } else {
        for code in selected {
            session.toggle(code);
            if !session.selection().contains(&countries::normalize(code)) {
                warn!(code, "country has no titles under the current filters, ignored");
            }
        }
    }

    let rows = session.table_view();
    if json {
        println!("{}", serde_json::to_string_pretty(&output::table_entries(&rows))?);
        return Ok(());
    }

    if !quiet {
        println!("{}", output::heading(&format!("{} titles", rows.len())));
    }
    for title in &rows {
        println!("{}", output::row_line(&output::table_row(title)));
        if verbose {
            let block = output::tooltip_block(&output::tooltip(title));
            if !block.is_empty() {
                println!("{block}");
            }
        }
    }
    Ok(())
}
