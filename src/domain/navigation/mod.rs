// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation: the open/closed state machine, swipe gestures and
//! the thumbnail strip window.

pub mod gesture;
pub mod lightbox;

pub use gesture::{classify_swipe, thumbnail_window, SwipeDirection};
pub use lightbox::{index_of_url, Navigator, Viewing};
