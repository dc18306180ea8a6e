//! Map command - per-country production counts for the choropleth feed

use crate::{ReelmapError, catalog::Catalog, cli::WindowArgs, output, session::ExploreSession};

type Result<T> = std::result::Result<T, ReelmapError>;

/// Execute the map command
///
/// Aggregates the catalog (optionally narrowed by the window flags) into one
/// row per country and prints the feed. By default only participating
/// countries are shown; `all` includes every code in the universe.
///
/// # Errors
/// Returns an error if JSON serialization or terminal output fails.
pub fn execute(
    catalog: &Catalog,
    windows: &WindowArgs,
    all: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let mut session = ExploreSession::new(catalog);
    session.apply(super::criteria(windows, None, None));

    let points = output::map_points(session.aggregates());
    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    if !quiet {
        println!("{}", output::heading(&session.summary()));
    }
    for point in points.iter().filter(|p| all || p.count > 0) {
        println!("{}", output::map_point_line(point));
    }
    Ok(())
}
