// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! Pure types and rules, testable without a window or a network.
//!
//! # Modules
//!
//! - [`gallery`]: Records and search ([`ImageItem`](gallery::ImageItem),
//!   [`FilterOptions`](gallery::FilterOptions), [`filter_and_sort`](gallery::filter_and_sort),
//!   [`SelectionPolicy`](gallery::SelectionPolicy))
//! - [`layout`]: Grid geometry ([`GridLayout`](layout::GridLayout),
//!   [`RowWindow`](layout::RowWindow))
//! - [`navigation`]: Lightbox state machine ([`Navigator`](navigation::Navigator))
//! - [`ui`]: UI value objects ([`ZoomLevel`](ui::ZoomLevel), [`ZoomStep`](ui::ZoomStep))

pub mod gallery;
pub mod layout;
pub mod navigation;
pub mod ui;
