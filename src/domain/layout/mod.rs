// SPDX-License-Identifier: MPL-2.0
//! Grid geometry: column computation and the virtualized row window.

pub mod grid;
pub mod window;

pub use grid::{GridLayout, GridParams};
pub use window::{visible_rows, RowWindow};
