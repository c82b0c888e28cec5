// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the ports in `application::port`, plus the
//! HTTP transport used for remote images.
//!
//! # Available Adapters
//!
//! - [`source`]: JSON file and bundled demo gallery sources (implement
//!   [`ImageRecordSource`])
//! - [`http`]: `reqwest` client for remote image bodies
//!
//! [`ImageRecordSource`]: crate::application::port::ImageRecordSource

pub mod http;
pub mod source;

pub use http::HttpFetcher;
pub use source::{EmbeddedGallerySource, JsonGallerySource};
