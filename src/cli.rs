//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for reelmap using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **map**: per-country production counts and hover labels for the map
//! - **table**: the full pipeline - structural filters, country selection,
//!   fuzzy narrowing - printed as a title table
//! - **search**: fuzzy search over the whole catalog
//! - **countries**: participating countries under the current filters
//! - **completions**: shell completion scripts
//!
//! # Design Features
//!
//! - Window flags take an optional `MIN..MAX` value; the bare flag enables
//!   the media type with its default window (`--movies` alone is `0..120`,
//!   `--tv` alone is `1..6`)
//! - Global `--data` to point at a catalog file and `--quiet` for
//!   scripting-friendly output
//! - Command aliases (e.g. `m` for `map`, `t` for `table`)

use crate::filters::{RUNTIME_SPAN, RuntimeRange, SEASONS_SPAN, SeasonRange};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Shared window flags for commands that filter by media type
#[derive(Parser, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Admit movies within an inclusive runtime window in minutes (the bare flag uses 0..120)
    #[arg(
        long = "movies",
        value_name = "MIN..MAX",
        num_args = 0..=1,
        default_missing_value = "0..120"
    )]
    pub movies: Option<RuntimeRange>,

    /// Admit TV shows within an inclusive season window (the bare flag uses 1..6)
    #[arg(
        long = "tv",
        value_name = "MIN..MAX",
        num_args = 0..=1,
        default_missing_value = "1..6"
    )]
    pub tv: Option<SeasonRange>,
}

impl WindowArgs {
    /// The requested windows, clamped to the selector spans.
    #[must_use]
    pub fn windows(&self) -> (Option<RuntimeRange>, Option<SeasonRange>) {
        (
            self.movies.map(|w| w.clamp_to(RUNTIME_SPAN)),
            self.tv.map(|w| w.clamp_to(SEASONS_SPAN)),
        )
    }

    /// Whether either media type was enabled.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.movies.is_some() || self.tv.is_some()
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "reelmap")]
#[command(
    about = "Explore a catalog of movies and TV titles by country of production",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog CSV file to load (overrides the configured default)
    #[arg(long = "data", global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Aggregate titles per production country for the map
    #[command(visible_alias = "m")]
    Map {
        #[command(flatten)]
        windows: WindowArgs,

        /// Include countries with no matching titles
        #[arg(short = 'a', long = "all")]
        all: bool,

        /// Emit the (location, count, hover) feed as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Run the full pipeline and print the title table
    #[command(visible_alias = "t")]
    Table {
        #[command(flatten)]
        windows: WindowArgs,

        /// Restrict to a country by alpha-3 code (repeatable, toggles the selection)
        #[arg(short = 'c', long = "country", value_name = "CODE")]
        countries: Vec<String>,

        /// Select every country participating under the current filters
        #[arg(long = "all-countries", conflicts_with = "countries")]
        all_countries: bool,

        /// Fuzzy query narrowing the table
        #[arg(long = "query", value_name = "TEXT")]
        query: Option<String>,

        /// Keep at most this many fuzzy matches
        #[arg(long = "top", value_name = "K")]
        top: Option<usize>,

        /// Print tooltip details under each row
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,

        /// Emit rows and tooltips as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Fuzzy search the whole catalog
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query matched against title, description, director and cast
        #[arg(value_name = "QUERY")]
        query: String,

        /// Keep at most this many matches
        #[arg(long = "top", value_name = "K")]
        top: Option<usize>,

        /// Emit matching rows as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List countries participating under the current filters
    #[command(visible_alias = "c")]
    Countries {
        #[command(flatten)]
        windows: WindowArgs,

        /// List the whole code universe, including zero counts
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
