// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a virtualized image gallery built with the Iced GUI
//! framework.
//!
//! Records come from a JSON gallery file (or the bundled demo gallery), are
//! searched and sorted in memory, and are shown in a responsive grid that
//! only builds the rows in view. Clicking a card opens a lightbox with
//! zoom, swipe navigation, a thumbnail strip and downloads.
//!
//! # Layers
//!
//! - [`domain`]: pure types and algorithms (filtering, grid geometry,
//!   lightbox navigation)
//! - [`application`]: ports implemented by the infrastructure
//! - [`infrastructure`]: gallery sources and the HTTP client
//! - [`media`]: image loading, caching, remote allow-list and downloads
//! - [`ui`] and [`app`]: the Iced front end

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;
