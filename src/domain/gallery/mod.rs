// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Records, search options, and the pure functions that derive the
//! displayed list from them.

pub mod filter;
pub mod selection;
pub mod types;

pub use filter::{compare, filter_and_sort, locale_compare};
pub use selection::{build_records, GalleryEntry, SelectionPolicy};
pub use types::{FilterOptions, ImageItem, SortBy, SortOrder};
