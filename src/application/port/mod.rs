// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits using domain types only.
//!
//! # Available Ports
//!
//! - [`source`]: Gallery data sources

pub mod source;

pub use source::{ImageRecordSource, SourceError};
