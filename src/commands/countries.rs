//! Countries command - which countries participate under the current filters

use crate::{ReelmapError, catalog::Catalog, cli::WindowArgs, output, session::ExploreSession};

type Result<T> = std::result::Result<T, ReelmapError>;

/// Execute the countries command
///
/// Lists each country's alpha-3 code, display name and matching title count
/// under the given windows. By default only participating countries appear;
/// `all` lists the whole universe.
///
/// # Errors
/// Returns an error if terminal output fails.
pub fn execute(catalog: &Catalog, windows: &WindowArgs, all: bool, quiet: bool) -> Result<()> {
    let mut session = ExploreSession::new(catalog);
    session.apply(super::criteria(windows, None, None));

    let participating = session.participating().len();
    if !quiet {
        println!(
            "{}",
            output::heading(&format!(
                "{participating} of {} countries have matching titles",
                session.aggregates().len()
            ))
        );
    }
    for row in session.aggregates() {
        if all || row.participates() {
            println!("{}", output::country_line(row.code, row.count));
        }
    }
    Ok(())
}
