// SPDX-License-Identifier: MPL-2.0
//! Core gallery records and the options that shape how they are listed.

/// One displayable image tied to a named gallery.
///
/// Records are built once from the image source and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageItem {
    /// Unique identifier across the whole collection.
    pub id: String,
    /// Image reference: a remote URL, a `file://` URL or a relative path.
    pub url: String,
    /// Human-readable gallery label shown on the card.
    pub gallery_name: String,
}

impl ImageItem {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        gallery_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            gallery_name: gallery_name.into(),
        }
    }
}

/// Field the grid is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    GalleryName,
    Url,
}

impl SortBy {
    /// All variants, in the order the sort picker lists them.
    pub const ALL: [SortBy; 2] = [SortBy::GalleryName, SortBy::Url];
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Search and ordering options applied to the full record set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub search_term: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl FilterOptions {
    /// Returns `true` if a non-empty search term is set.
    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_sort_by_gallery_ascending() {
        let options = FilterOptions::default();
        assert_eq!(options.sort_by, SortBy::GalleryName);
        assert_eq!(options.sort_order, SortOrder::Asc);
        assert!(!options.has_search());
    }

    #[test]
    fn toggled_flips_direction() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }
}
