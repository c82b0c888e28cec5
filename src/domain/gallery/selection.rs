// SPDX-License-Identifier: MPL-2.0
//! Turning raw gallery entries into the flat record list.

use super::types::ImageItem;

/// A named gallery with its ordered image references, as read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub name: String,
    pub images: Vec<String>,
}

impl GalleryEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            name: name.into(),
            images,
        }
    }
}

/// Which images of each gallery entry become records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// One record per entry, using the image at this position.
    /// Entries with fewer images are skipped.
    Index(usize),
    /// One record per image of every entry.
    All,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::Index(1)
    }
}

/// Builds the record list for `entries`.
///
/// For entry `k` named `name`, the record gets id `"{name}-{k}"` and gallery
/// name `"{name} Image {k+1}"`. Under [`SelectionPolicy::All`] the image
/// position is appended to the id to keep it unique. The finished list is
/// reversed, so the last entry comes first.
#[must_use]
pub fn build_records(entries: &[GalleryEntry], policy: SelectionPolicy) -> Vec<ImageItem> {
    let mut records = Vec::with_capacity(entries.len());

    for (k, entry) in entries.iter().enumerate() {
        let gallery_name = format!("{} Image {}", entry.name, k + 1);
        match policy {
            SelectionPolicy::Index(position) => {
                if let Some(url) = entry.images.get(position) {
                    records.push(ImageItem::new(
                        format!("{}-{}", entry.name, k),
                        url.clone(),
                        gallery_name,
                    ));
                }
            }
            SelectionPolicy::All => {
                for (j, url) in entry.images.iter().enumerate() {
                    records.push(ImageItem::new(
                        format!("{}-{}-{}", entry.name, k, j),
                        url.clone(),
                        gallery_name.clone(),
                    ));
                }
            }
        }
    }

    records.reverse();
    records
}
