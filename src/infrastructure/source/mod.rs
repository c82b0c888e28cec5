// SPDX-License-Identifier: MPL-2.0
//! Gallery data source adapters.

pub mod embedded;
pub mod json;

pub use embedded::EmbeddedGallerySource;
pub use json::{parse_entries, JsonGallerySource};
