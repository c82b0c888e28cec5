// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each component follows the same shape: a `State` with a `handle` method
//! returning an `Effect` for the parent, a `Message` enum, and a `view`
//! function taking a `ViewContext`.
//!
//! - [`search_bar`]: search term (debounced), sort field and direction
//! - [`grid`]: virtualized grid of [`card`]s
//! - [`lightbox`]: full-window viewer with zoom, swipe and thumbnails

pub mod card;
pub mod design_tokens;
pub mod grid;
pub mod lightbox;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod widgets;
