// SPDX-License-Identifier: MPL-2.0
//! Image acquisition for the grid and the lightbox.
//!
//! References are resolved against the remote allow-list or the data file
//! directory, fetched, sized and kept in a shared LRU cache. Downloads reuse
//! the same path.

pub mod cache;
pub mod download;
pub mod loader;
pub mod remote;

pub use cache::{CacheStats, ImageCache};
pub use download::{download_file_name, save_to_downloads};
pub use loader::{ImageLoader, LoadedImage};
pub use remote::{AllowList, RemotePattern};
