//! Reelmap CLI application entry point
//!
//! This is the main executable for reelmap, a command-line explorer for a
//! catalog of movies and TV titles by country of production.
//!
//! # Usage
//!
//! ```bash
//! # Per-country production counts over the whole catalog
//! reelmap map
//! reelmap m --json
//!
//! # Movies between 0 and 120 minutes, counted per country
//! reelmap map --movies 0..120
//!
//! # The title table: windows, country selection, fuzzy narrowing
//! reelmap table --movies --tv 1..6 -c USA -c FRA --query "space" --top 20
//! reelmap table --all-countries --tv -v
//!
//! # Fuzzy search over the whole catalog
//! reelmap search "attenborough"
//!
//! # Which countries participate under a season window
//! reelmap countries --tv 1..3
//!
//! # Quiet mode (only output rows)
//! reelmap -q table --movies
//! ```
//!
//! # Configuration
//!
//! Defaults such as the catalog location live in the user's config directory
//! (`~/.config/reelmap/config.toml` on Linux) and are created on first run.
//! `--data <PATH>` overrides the configured catalog for one invocation.
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use reelmap::{
    ReelmapError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::ReelmapConfig,
};

type Result<T> = std::result::Result<T, ReelmapError>;

/// Route tracing output to stderr so stdout stays pipeable.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration and the catalog, then dispatch to the command handler.
///
/// # Errors
///
/// Returns `ReelmapError` if configuration loading fails, the catalog cannot
/// be loaded, or a command handler returns an error.
fn run() -> Result<()> {
    let config = ReelmapConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    if let Commands::Completions { shell } = &cli.command {
        commands::generate_completions(*shell);
        return Ok(());
    }

    let catalog_path = config.catalog_path(cli.data.clone())?;
    let catalog = Catalog::load(&catalog_path)?;

    match cli.command {
        Commands::Map { windows, all, json } => {
            commands::map(&catalog, &windows, all, json, quiet)?;
        }
        Commands::Table {
            windows,
            countries,
            all_countries,
            query,
            top,
            verbose,
            json,
        } => {
            commands::table(
                &catalog,
                &windows,
                &countries,
                all_countries,
                query,
                top.unwrap_or(config.top_results),
                verbose,
                json,
                quiet,
            )?;
        }
        Commands::Search { query, top, json } => {
            commands::search(
                &catalog,
                &query,
                top.unwrap_or(config.top_results),
                json,
                quiet,
            )?;
        }
        Commands::Countries { windows, all } => {
            commands::list_countries(&catalog, &windows, all, quiet)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
