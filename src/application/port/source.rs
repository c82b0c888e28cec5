// SPDX-License-Identifier: MPL-2.0
//! Image record source port.
//!
//! A source yields the raw gallery entries; turning them into the flat
//! record list is shared by every adapter through
//! [`ImageRecordSource::load_records`].

use crate::domain::gallery::{build_records, GalleryEntry, ImageItem, SelectionPolicy};
use std::fmt;

// =============================================================================
// SourceError
// =============================================================================

/// Errors that can occur while reading gallery entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The backing file does not exist.
    NotFound(String),

    /// The backing data could not be read.
    Io(String),

    /// The data was read but is not in the expected shape.
    Malformed(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound(what) => write!(f, "Gallery data not found: {what}"),
            SourceError::Io(msg) => write!(f, "I/O error: {msg}"),
            SourceError::Malformed(msg) => write!(f, "Malformed gallery data: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

// =============================================================================
// ImageRecordSource
// =============================================================================

/// Anything that can produce the ordered gallery entries.
pub trait ImageRecordSource: Send + Sync {
    /// Short description used in logs and the status line.
    fn describe(&self) -> String;

    /// Reads every gallery entry, in source order.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the data is missing or malformed.
    fn load_entries(&self) -> Result<Vec<GalleryEntry>, SourceError>;

    /// Reads the entries and flattens them into records with `policy`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`load_entries`](Self::load_entries).
    fn load_records(&self, policy: SelectionPolicy) -> Result<Vec<ImageItem>, SourceError> {
        let entries = self.load_entries()?;
        Ok(build_records(&entries, policy))
    }
}
