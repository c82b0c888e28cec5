// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! Value objects independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{ZoomLevel, ZoomStep};
