//! Testing utilities for reelmap
//!
//! Fixture builders for titles and an RAII temporary catalog file for
//! exercising the CSV loader.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, MediaType, Title};
use std::fs;
use std::path::{Path, PathBuf};

/// A movie fixture with the descriptive fields left empty.
#[must_use]
pub fn movie(show_id: &str, title: &str, country_code: &str, minutes: u32) -> Title {
    Title {
        show_id: show_id.to_string(),
        media_type: MediaType::Movie,
        title: title.to_string(),
        description: String::new(),
        cast: String::new(),
        director: String::new(),
        country: String::new(),
        country_code: country_code.to_string(),
        release_year: 2020,
        runtime_minutes: Some(minutes),
        seasons: None,
        listed_in: String::new(),
    }
}

/// A TV show fixture with the descriptive fields left empty.
#[must_use]
pub fn tv_show(show_id: &str, title: &str, country_code: &str, seasons: u32) -> Title {
    Title {
        show_id: show_id.to_string(),
        media_type: MediaType::TvShow,
        title: title.to_string(),
        description: String::new(),
        cast: String::new(),
        director: String::new(),
        country: String::new(),
        country_code: country_code.to_string(),
        release_year: 2020,
        runtime_minutes: None,
        seasons: Some(seasons),
        listed_in: String::new(),
    }
}

/// A catalog built directly from fixtures, skipping the CSV loader.
#[must_use]
pub fn catalog_of(titles: Vec<Title>) -> Catalog {
    Catalog::from_titles(titles)
}

/// RAII guard for a temporary catalog CSV file
///
/// Writes the given CSV text into a unique temporary directory and removes
/// the directory on drop, so parallel tests never collide.
pub struct TempCatalog {
    path: PathBuf,
    temp_dir: PathBuf,
}

impl TempCatalog {
    /// Write `csv_text` to a fresh temporary catalog file.
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    pub fn new(name: &str, csv_text: &str) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        let thread_id = std::thread::current().id();
        let temp_dir = std::env::temp_dir().join(format!("reelmap_{name}_{timestamp}_{thread_id:?}"));
        fs::create_dir_all(&temp_dir).expect("failed to create temp catalog dir");

        let path = temp_dir.join("catalog.csv");
        fs::write(&path, csv_text).expect("failed to write temp catalog");
        Self { path, temp_dir }
    }

    /// Path of the catalog file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempCatalog {
    fn drop(&mut self) {
        // Best effort cleanup - ignore errors
        let _ = fs::remove_dir_all(&self.temp_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_builders_fill_duration_by_type() {
        let m = movie("s1", "A", "USA", 90);
        assert_eq!(m.runtime_minutes, Some(90));
        assert_eq!(m.seasons, None);

        let tv = tv_show("s2", "B", "GBR", 3);
        assert_eq!(tv.runtime_minutes, None);
        assert_eq!(tv.seasons, Some(3));
    }

    #[test]
    fn test_temp_catalog_loads_and_cleans_up() {
        let csv = "show_id,type,title,release_year,duration\ns1,Movie,Heat,1995,170";
        let dir;
        {
            let temp = TempCatalog::new("roundtrip", csv);
            dir = temp.temp_dir.clone();
            let catalog = Catalog::load(temp.path()).unwrap();
            assert_eq!(catalog.len(), 1);
        }
        assert!(!dir.exists());
    }
}
