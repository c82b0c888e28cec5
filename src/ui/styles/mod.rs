// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every gallery widget.

pub mod button;
pub mod container;
pub mod overlay;

pub use button::{overlay as button_overlay, selected as button_selected};
