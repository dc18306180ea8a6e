//! Output formatting for CLI display
//!
//! The structured view feeds the downstream sinks consume (map points, table
//! rows, tooltips) and the text rendering of each for the terminal. Feeds
//! serialize to JSON for piping into other tools.

use crate::aggregate::CountryAggregate;
use crate::catalog::Title;
use crate::countries;
use colored::Colorize;
use serde::Serialize;

/// One `(location, count, hover)` triple of the map feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapPoint {
    pub location: &'static str,
    pub count: usize,
    pub hover: String,
}

/// One row of the table view, the literal display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub show_id: String,
    #[serde(rename = "type")]
    pub media_type: &'static str,
    pub title: String,
    pub release_year: u16,
    pub duration: String,
    pub country_code: String,
}

/// Hover details for one table row. Missing values are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowTooltip {
    pub genre: String,
    pub description: String,
    pub cast: String,
    pub director: String,
    pub country: String,
}

/// A table row together with its tooltip, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct TableEntry {
    #[serde(flatten)]
    pub row: TableRow,
    pub tooltip: RowTooltip,
}

/// The map feed for an aggregate, one point per universe country.
#[must_use]
pub fn map_points(aggregates: &[CountryAggregate]) -> Vec<MapPoint> {
    aggregates
        .iter()
        .map(|a| MapPoint {
            location: a.code,
            count: a.count,
            hover: a.hover_label(),
        })
        .collect()
}

/// The display fields of one title.
#[must_use]
pub fn table_row(title: &Title) -> TableRow {
    TableRow {
        show_id: title.show_id.clone(),
        media_type: title.media_type.label(),
        title: title.title.clone(),
        release_year: title.release_year,
        duration: title.duration_label(),
        country_code: title.country_code.clone(),
    }
}

/// The tooltip fields of one title.
#[must_use]
pub fn tooltip(title: &Title) -> RowTooltip {
    RowTooltip {
        genre: title.listed_in.clone(),
        description: title.description.clone(),
        cast: title.cast.clone(),
        director: title.director.clone(),
        country: title.country.clone(),
    }
}

/// Table entries (row plus tooltip) for a title sequence.
#[must_use]
pub fn table_entries(titles: &[Title]) -> Vec<TableEntry> {
    titles
        .iter()
        .map(|t| TableEntry {
            row: table_row(t),
            tooltip: tooltip(t),
        })
        .collect()
}

/// Render a section heading.
#[must_use]
pub fn heading(text: &str) -> String {
    text.bold().to_string()
}

/// Render one map point as a terminal line.
#[must_use]
pub fn map_point_line(point: &MapPoint) -> String {
    let count = format!("{:>5}", point.count);
    if point.hover.is_empty() {
        format!("  {} {}", point.location.cyan(), count.yellow())
    } else {
        format!(
            "  {} {}  {}",
            point.location.cyan(),
            count.yellow(),
            point.hover.dimmed()
        )
    }
}

/// Render one table row as a terminal line.
#[must_use]
pub fn row_line(row: &TableRow) -> String {
    let mut line = format!(
        "  {} {:<8} {}",
        row.show_id.dimmed(),
        row.media_type,
        row.title.bold()
    );
    if row.release_year > 0 {
        line.push_str(&format!(" ({})", row.release_year));
    }
    if !row.duration.is_empty() {
        line.push_str(&format!(", {}", row.duration));
    }
    if !row.country_code.is_empty() {
        line.push_str(&format!(" [{}]", row.country_code.cyan()));
    }
    line
}

/// Render a tooltip as indented detail lines, skipping empty fields.
#[must_use]
pub fn tooltip_block(tip: &RowTooltip) -> String {
    let fields = [
        ("genre", &tip.genre),
        ("description", &tip.description),
        ("cast", &tip.cast),
        ("director", &tip.director),
        ("country", &tip.country),
    ];
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("      {} {value}", format!("{name}:").dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a country listing line with its display name and count.
#[must_use]
pub fn country_line(code: &str, count: usize) -> String {
    let name = countries::name_of(code).unwrap_or("");
    format!("  {} {:>5}  {}", code.cyan(), count.to_string().yellow(), name)
}
