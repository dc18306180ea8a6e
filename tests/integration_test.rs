//! Integration tests for the reelmap pipeline
//!
//! These tests load catalogs from real CSV files on disk and exercise the
//! complete path from catalog load through aggregation, filtering, search
//! and country selection.

use reelmap::aggregate::{self, SAMPLE_MARKER};
use reelmap::catalog::{Catalog, CatalogError, MediaType};
use reelmap::countries;
use reelmap::filters::{self, FilterCriteria, RuntimeRange, SeasonRange};
use reelmap::output;
use reelmap::search;
use reelmap::session::{ExploreSession, Selection, SelectionEvent, reduce};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "show_id,type,title,director,cast,country,country_code,release_year,duration,listed_in,description";

/// Write the given rows under the standard header and load them.
fn load_catalog(rows: &[&str]) -> (TempDir, Catalog) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    fs::write(&path, text).unwrap();
    let catalog = Catalog::load(&path).unwrap();
    (dir, catalog)
}

/// The two-title scenario: one US movie, one British TV show.
fn two_title_catalog() -> (TempDir, Catalog) {
    load_catalog(&[
        "1,Movie,A,,,United States,USA,2001,100,,",
        "2,TV Show,B,,,United Kingdom,GBR,2005,3,,",
    ])
}

#[test]
fn test_catalog_loads_typed_rows() {
    let (_dir, catalog) = two_title_catalog();
    assert_eq!(catalog.len(), 2);

    let movie = &catalog.titles()[0];
    assert_eq!(movie.media_type, MediaType::Movie);
    assert_eq!(movie.runtime_minutes, Some(100));
    assert_eq!(movie.seasons, None);

    let show = &catalog.titles()[1];
    assert_eq!(show.media_type, MediaType::TvShow);
    assert_eq!(show.seasons, Some(3));
}

#[test]
fn test_missing_catalog_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_unknown_media_type_aborts_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    let text = format!("{HEADER}\n1,Movie,Fine,,,,,2000,90,,\n2,Podcast,Broken,,,,,2001,50,,");
    fs::write(&path, text).unwrap();
    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownMediaType { .. }));
}

#[test]
fn test_aggregate_covers_the_universe_without_duplicates() {
    let (_dir, catalog) = two_title_catalog();
    let rows = aggregate::aggregate(catalog.titles());

    assert_eq!(rows.len(), countries::count());
    let unique: BTreeSet<&str> = rows.iter().map(|r| r.code).collect();
    assert_eq!(unique.len(), rows.len());

    for row in &rows {
        let expected = match row.code {
            "USA" | "GBR" => 1,
            _ => 0,
        };
        assert_eq!(row.count, expected, "unexpected count for {}", row.code);
    }
}

#[test]
fn test_multi_country_titles_count_once_per_listed_code() {
    let (_dir, catalog) = load_catalog(&[
        "1,Movie,Solo,,,United States,USA,2010,90,,",
        "2,Movie,Joint,,,\"United States, France\",\"USA, FRA\",2012,110,,",
        "3,Movie,Stateless,,,,,2014,95,,",
    ]);
    let rows = aggregate::aggregate(catalog.titles());

    let coded_titles = catalog
        .titles()
        .iter()
        .filter(|t| !t.country_code.is_empty())
        .count();
    let total: usize = rows.iter().map(|r| r.count).sum();
    assert!(total >= coded_titles);
    assert_eq!(total, 3); // USA twice, FRA once

    assert_eq!(
        aggregate::summary_line(&rows),
        "Showing 3 Titles by country of production"
    );
}

#[test]
fn test_hover_label_marks_truncated_samples() {
    let rows: Vec<String> = (0..7)
        .map(|i| format!("{i},Movie,Film {i},,,Norway,NOR,2015,80,,"))
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let (_dir, catalog) = load_catalog(&refs);

    let points = output::map_points(&aggregate::aggregate(catalog.titles()));
    let nor = points.iter().find(|p| p.location == "NOR").unwrap();
    assert_eq!(nor.count, 7);
    assert!(nor.hover.ends_with(SAMPLE_MARKER));
}

#[test]
fn test_filter_with_no_windows_admits_nothing() {
    let (_dir, catalog) = two_title_catalog();
    assert!(filters::filter_titles(catalog.titles(), None, None).is_empty());
}

#[test]
fn test_runtime_window_admits_only_the_movie() {
    let (_dir, catalog) = two_title_catalog();

    let movies = filters::filter_titles(catalog.titles(), Some(RuntimeRange::new(90, 110)), None);
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].show_id, "1");

    let shows = filters::filter_titles(catalog.titles(), None, Some(SeasonRange::new(1, 5)));
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].show_id, "2");
}

#[test]
fn test_search_empty_query_is_identity() {
    let (_dir, catalog) = two_title_catalog();
    let hits = search::search(catalog.titles(), "", 1);
    assert_eq!(hits, catalog.titles());
}

#[test]
fn test_search_respects_top_k_for_all_k() {
    let (_dir, catalog) = load_catalog(&[
        "1,Movie,Planet One,,,,,2001,90,,A planet story",
        "2,Movie,Planet Two,,,,,2002,95,,Another planet story",
        "3,Movie,Planet Three,,,,,2003,99,,Yet another planet story",
    ]);
    for k in 0..5 {
        let hits = search::search(catalog.titles(), "planet", k);
        assert!(hits.len() <= k.min(catalog.len()));
    }
}

#[test]
fn test_selection_double_toggle_is_identity() {
    let (_dir, catalog) = two_title_catalog();
    let rows = aggregate::aggregate(catalog.titles());

    let start = Selection::new();
    let once = reduce(&start, SelectionEvent::Toggle("USA".to_string()), &rows);
    assert!(once.contains("USA"));
    let twice = reduce(&once, SelectionEvent::Toggle("USA".to_string()), &rows);
    assert_eq!(twice, start);
}

#[test]
fn test_select_all_matches_participation_then_clear() {
    let (_dir, catalog) = two_title_catalog();
    let rows = aggregate::aggregate(catalog.titles());

    let all = reduce(&Selection::new(), SelectionEvent::SelectAll, &rows);
    let codes: Vec<&str> = all.iter().map(String::as_str).collect();
    assert_eq!(codes, vec!["GBR", "USA"]);

    let cleared = reduce(&all, SelectionEvent::Clear, &rows);
    assert!(cleared.is_empty());
}

#[test]
fn test_session_pipeline_end_to_end() {
    let (_dir, catalog) = load_catalog(&[
        "1,Movie,Blue Planet,,,United Kingdom,GBR,2001,95,,Ocean documentary",
        "2,Movie,Red Desert,,,Italy,ITA,1964,117,,Industrial alienation",
        "3,TV Show,Dark,,,Germany,DEU,2017,3,,Time travel",
        "4,Movie,Long Epic,,,United Kingdom,GBR,1999,210,,Very long film",
    ]);
    let mut session = ExploreSession::new(&catalog);
    assert_eq!(session.filtered().len(), 4);

    session.apply(
        FilterCriteria::builder()
            .runtime(RuntimeRange::new(0, 120))
            .query("documentary")
            .build(),
    );
    // The 210 minute movie and the TV show leave the filtered set.
    assert_eq!(session.filtered().len(), 2);
    assert_eq!(session.participating(), vec!["GBR", "ITA"]);

    session.toggle("GBR");
    let rows = session.table_view();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].show_id, "1");
}

#[test]
fn test_session_prunes_selection_when_filters_reapply() {
    let (_dir, catalog) = load_catalog(&[
        "1,Movie,Short,,,United States,USA,2001,80,,",
        "2,Movie,Long,,,France,FRA,2002,180,,",
    ]);
    let mut session = ExploreSession::new(&catalog);
    session.toggle("USA");
    session.toggle("FRA");
    assert_eq!(session.selection().len(), 2);

    session.apply(
        FilterCriteria::builder()
            .runtime(RuntimeRange::new(0, 120))
            .build(),
    );
    assert!(session.selection().contains("USA"));
    assert!(!session.selection().contains("FRA"));
}

#[test]
fn test_toggling_nonparticipating_country_is_a_noop() {
    let (_dir, catalog) = two_title_catalog();
    let mut session = ExploreSession::new(&catalog);
    session.toggle("JPN");
    assert!(session.selection().is_empty());
}

#[test]
fn test_table_entries_expose_display_and_tooltip_fields() {
    let (_dir, catalog) = load_catalog(&[
        "1,Movie,Heat,Michael Mann,Al Pacino,United States,USA,1995,170,Thrillers,Cops and robbers",
    ]);
    let entries = output::table_entries(catalog.titles());
    let json = serde_json::to_value(&entries).unwrap();

    assert_eq!(json[0]["show_id"], "1");
    assert_eq!(json[0]["type"], "Movie");
    assert_eq!(json[0]["title"], "Heat");
    assert_eq!(json[0]["release_year"], 1995);
    assert_eq!(json[0]["duration"], "170 min");
    assert_eq!(json[0]["country_code"], "USA");
    assert_eq!(json[0]["tooltip"]["genre"], "Thrillers");
    assert_eq!(json[0]["tooltip"]["director"], "Michael Mann");
    assert_eq!(json[0]["tooltip"]["country"], "United States");
}

#[test]
fn test_degenerate_rows_flow_through_the_whole_pipeline() {
    let (_dir, catalog) = load_catalog(&["1,Movie,,,,,,,90,,"]);
    let title = &catalog.titles()[0];
    assert_eq!(title.title, "");
    assert_eq!(title.release_year, 0);

    // No country code: counted nowhere, but never an error.
    let rows = aggregate::aggregate(catalog.titles());
    assert!(rows.iter().all(|r| r.count == 0));

    // Still searchable and filterable.
    let kept = filters::filter_titles(catalog.titles(), Some(RuntimeRange::new(0, 120)), None);
    assert_eq!(kept.len(), 1);
    assert_eq!(search::search(catalog.titles(), "", 10).len(), 1);
}
