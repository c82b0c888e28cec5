// SPDX-License-Identifier: MPL-2.0
//! Gallery data stored as a JSON file.
//!
//! The file holds an array of galleries:
//!
//! ```json
//! [
//!   { "name": "Beach", "images": ["https://brave.photos/a.jpg", "..."] }
//! ]
//! ```

use crate::application::port::{ImageRecordSource, SourceError};
use crate::domain::gallery::GalleryEntry;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct GalleryRecord {
    name: String,
    #[serde(default)]
    images: Vec<String>,
}

impl From<GalleryRecord> for GalleryEntry {
    fn from(record: GalleryRecord) -> Self {
        GalleryEntry::new(record.name, record.images)
    }
}

/// Parses the JSON gallery format.
///
/// # Errors
///
/// Returns [`SourceError::Malformed`] if `data` is not a JSON array of
/// `{ name, images }` objects.
pub fn parse_entries(data: &[u8]) -> Result<Vec<GalleryEntry>, SourceError> {
    let records: Vec<GalleryRecord> =
        serde_json::from_slice(data).map_err(|e| SourceError::Malformed(e.to_string()))?;
    Ok(records.into_iter().map(GalleryEntry::from).collect())
}

/// Reads galleries from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonGallerySource {
    path: PathBuf,
}

impl JsonGallerySource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory relative image references resolve against.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.parent()
    }
}

impl ImageRecordSource for JsonGallerySource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_entries(&self) -> Result<Vec<GalleryEntry>, SourceError> {
        let data = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(self.describe()),
            _ => SourceError::Io(e.to_string()),
        })?;
        parse_entries(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::SelectionPolicy;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        { "name": "Beach", "images": ["b0.jpg", "b1.jpg"] },
        { "name": "City", "images": ["c0.jpg", "c1.jpg", "c2.jpg"] }
    ]"#;

    #[test]
    fn parse_entries_reads_names_and_images() {
        let entries = parse_entries(SAMPLE.as_bytes()).expect("valid json");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Beach");
        assert_eq!(entries[1].images.len(), 3);
    }

    #[test]
    fn parse_entries_defaults_missing_images() {
        let entries = parse_entries(br#"[{ "name": "Empty" }]"#).expect("valid json");
        assert!(entries[0].images.is_empty());
    }

    #[test]
    fn parse_entries_rejects_wrong_shape() {
        let err = parse_entries(br#"{ "name": "Beach" }"#).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn file_source_loads_records() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("gallery.json");
        fs::write(&path, SAMPLE).expect("write sample");

        let source = JsonGallerySource::new(&path);
        let records = source
            .load_records(SelectionPolicy::default())
            .expect("records");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "City-1");
        assert_eq!(records[0].url, "c1.jpg");
        assert_eq!(source.base_dir(), Some(dir.path()));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().expect("temp dir");
        let source = JsonGallerySource::new(dir.path().join("absent.json"));
        assert!(matches!(
            source.load_entries(),
            Err(SourceError::NotFound(described)) if described.ends_with("absent.json")
        ));
    }
}
