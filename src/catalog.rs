//! Catalog loading
//!
//! The catalog is a single JSON document `{"projects": [...]}` read once at
//! startup. Loading never fails: any I/O or parse problem substitutes exactly
//! one synthetic error record so the rest of the UI renders uniformly.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::project::ProjectRecord;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    projects: Vec<ProjectRecord>,
}

/// Owning, immutable-after-load project list
#[derive(Debug)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    is_fallback: bool,
}

impl Catalog {
    /// Load from `path`. An empty `projects` array is a valid empty catalog;
    /// a missing file, unreadable contents, malformed JSON or a missing
    /// `projects` key all degrade to the one-record fallback.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read catalog, using fallback");
                return Self::fallback();
            }
        };

        match serde_json::from_str::<CatalogFile>(&contents) {
            Ok(file) => {
                info!(path = %path.display(), projects = file.projects.len(), "catalog loaded");
                Self {
                    records: file.projects,
                    is_fallback: false,
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed catalog, using fallback");
                Self::fallback()
            }
        }
    }

    /// Exactly one `ProjectRecord::load_failure` record
    pub fn fallback() -> Self {
        Self {
            records: vec![ProjectRecord::load_failure()],
            is_fallback: true,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when this catalog is the load-failure substitute
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_load_valid_catalog() {
        let file = write_catalog(
            r#"{"projects": [{"title": "One"}, {"title": "Two", "techTags": ["rust"]}]}"#,
        );
        let catalog = Catalog::load(file.path());
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_fallback());
        assert_eq!(catalog.get(1).unwrap().tech_tags, ["rust"]);
    }

    #[test]
    fn test_load_empty_array_is_valid_and_empty() {
        let file = write_catalog(r#"{"projects": []}"#);
        let catalog = Catalog::load(file.path());
        assert!(catalog.is_empty());
        assert!(!catalog.is_fallback());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let catalog = Catalog::load(Path::new("/nonexistent/projects.json"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.is_fallback());
        assert_eq!(catalog.get(0).unwrap().title, crate::constants::fallback::TITLE);
    }

    #[test]
    fn test_load_malformed_json_falls_back() {
        let file = write_catalog("{not json");
        let catalog = Catalog::load(file.path());
        assert!(catalog.is_fallback());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_missing_projects_key_falls_back() {
        let file = write_catalog(r#"{"items": []}"#);
        let catalog = Catalog::load(file.path());
        assert!(catalog.is_fallback());
    }

    #[test]
    fn test_fallback_record_has_empty_collections() {
        let catalog = Catalog::fallback();
        let record = catalog.get(0).unwrap();
        assert!(record.tech_tags.is_empty());
        assert!(record.links.is_empty());
        assert!(record.stats.is_empty());
        assert!(record.details.is_empty());
    }
}
