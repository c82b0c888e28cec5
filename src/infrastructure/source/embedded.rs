// SPDX-License-Identifier: MPL-2.0
//! Demo galleries bundled into the binary.

use super::json::parse_entries;
use crate::application::port::{ImageRecordSource, SourceError};
use crate::domain::gallery::GalleryEntry;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct GalleryAsset;

const DATA_FILE: &str = "data.json";

/// Source backed by the bundled `data.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedGallerySource;

impl ImageRecordSource for EmbeddedGallerySource {
    fn describe(&self) -> String {
        "embedded demo gallery".to_string()
    }

    fn load_entries(&self) -> Result<Vec<GalleryEntry>, SourceError> {
        let file = GalleryAsset::get(DATA_FILE)
            .ok_or_else(|| SourceError::NotFound(DATA_FILE.to_string()))?;
        parse_entries(file.data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::SelectionPolicy;

    #[test]
    fn bundled_data_parses() {
        let entries = EmbeddedGallerySource.load_entries().expect("bundled data");
        assert!(!entries.is_empty());
    }

    #[test]
    fn bundled_records_have_unique_ids() {
        let records = EmbeddedGallerySource
            .load_records(SelectionPolicy::default())
            .expect("bundled data");
        let mut ids: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }
}
