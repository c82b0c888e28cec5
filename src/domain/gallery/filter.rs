// SPDX-License-Identifier: MPL-2.0
//! Search filtering and ordering of gallery records.
//!
//! Pure functions: no I/O and no error conditions. Called every time the
//! search options or the record set change.

use std::cmp::Ordering;

use super::types::{FilterOptions, ImageItem, SortBy, SortOrder};

/// Returns the records matching `options.search_term`, ordered by
/// `options.sort_by` in `options.sort_order`.
///
/// A record matches when its gallery name or its URL contains the term,
/// ignoring case. An empty term keeps every record. Records with equal sort
/// keys are ordered by `id`, so the order is total and `Desc` is the exact
/// reverse of `Asc`.
#[must_use]
pub fn filter_and_sort(images: &[ImageItem], options: &FilterOptions) -> Vec<ImageItem> {
    let needle = options.search_term.to_lowercase();

    let mut filtered: Vec<ImageItem> = images
        .iter()
        .filter(|image| matches_search(image, &needle))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| compare(a, b, options.sort_by, options.sort_order));
    filtered
}

/// `needle` must already be lowercased.
fn matches_search(image: &ImageItem, needle: &str) -> bool {
    needle.is_empty()
        || image.gallery_name.to_lowercase().contains(needle)
        || image.url.to_lowercase().contains(needle)
}

/// Orders two records by the chosen field and direction.
#[must_use]
pub fn compare(a: &ImageItem, b: &ImageItem, sort_by: SortBy, sort_order: SortOrder) -> Ordering {
    let ordering = match sort_by {
        SortBy::GalleryName => locale_compare(&a.gallery_name, &b.gallery_name),
        SortBy::Url => locale_compare(&a.url, &b.url),
    }
    .then_with(|| a.id.cmp(&b.id));

    match sort_order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Human-oriented string ordering.
///
/// Case is ignored first. Strings that differ only by case put the
/// lowercase form first, which matches the default collation of common
/// locales.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, url: &str, gallery: &str) -> ImageItem {
        ImageItem::new(id, url, gallery)
    }

    fn sample() -> Vec<ImageItem> {
        vec![
            item("a-0", "https://brave.photos/a.jpg", "Alpha Image 1"),
            item("b-1", "https://brave.photos/b.jpg", "beta Image 2"),
            item("c-2", "https://brave.photos/c.jpg", "Gamma Image 3"),
            item("d-3", "https://brave.photos/sunset.jpg", "Delta Image 4"),
        ]
    }

    fn options(term: &str, sort_by: SortBy, sort_order: SortOrder) -> FilterOptions {
        FilterOptions {
            search_term: term.to_string(),
            sort_by,
            sort_order,
        }
    }

    fn ids(items: &[ImageItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_term_keeps_everything() {
        let result = filter_and_sort(&sample(), &FilterOptions::default());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_on_gallery_name() {
        let result = filter_and_sort(&sample(), &options("BETA", SortBy::GalleryName, SortOrder::Asc));
        assert_eq!(ids(&result), vec!["b-1"]);
    }

    #[test]
    fn search_matches_url() {
        let result = filter_and_sort(&sample(), &options("Sunset", SortBy::GalleryName, SortOrder::Asc));
        assert_eq!(ids(&result), vec!["d-3"]);
    }

    #[test]
    fn every_result_contains_the_term() {
        let term = "image 1";
        let result = filter_and_sort(&sample(), &options(term, SortBy::Url, SortOrder::Asc));
        assert!(!result.is_empty());
        for image in &result {
            assert!(
                image.gallery_name.to_lowercase().contains(term)
                    || image.url.to_lowercase().contains(term)
            );
        }
    }

    #[test]
    fn no_match_yields_empty() {
        let result = filter_and_sort(&sample(), &options("zzz", SortBy::GalleryName, SortOrder::Asc));
        assert!(result.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let result = filter_and_sort(&[], &FilterOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn gallery_name_sort_ignores_case() {
        let result = filter_and_sort(&sample(), &FilterOptions::default());
        assert_eq!(ids(&result), vec!["a-0", "b-1", "d-3", "c-2"]);
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        let mut images = sample();
        images.push(item("e-4", "https://brave.photos/e.jpg", "Alpha Image 1"));
        images.push(item("f-5", "https://brave.photos/f.jpg", "alpha image 1"));

        for sort_by in SortBy::ALL {
            let asc = filter_and_sort(&images, &options("", sort_by, SortOrder::Asc));
            let mut desc = filter_and_sort(&images, &options("", sort_by, SortOrder::Desc));
            desc.reverse();
            assert_eq!(asc, desc);
        }
    }

    #[test]
    fn equal_keys_are_ordered_by_id() {
        let images = vec![
            item("z", "u1", "Same"),
            item("m", "u2", "Same"),
            item("a", "u3", "Same"),
        ];
        let result = filter_and_sort(&images, &FilterOptions::default());
        assert_eq!(ids(&result), vec!["a", "m", "z"]);
    }

    #[test]
    fn locale_compare_puts_lowercase_first_on_case_ties() {
        assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn url_sort_orders_by_url() {
        let result = filter_and_sort(&sample(), &options("", SortBy::Url, SortOrder::Desc));
        assert_eq!(ids(&result), vec!["d-3", "c-2", "b-1", "a-0"]);
    }
}
