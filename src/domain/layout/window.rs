// SPDX-License-Identifier: MPL-2.0
//! Visible row window for grid virtualization.
//!
//! Only rows intersecting the viewport (plus an overscan margin) are
//! materialized. Spacers above and below keep the scrollable content at its
//! full height so scroll offsets stay stable.

use std::ops::Range;

/// Rows to materialize and the space the skipped rows occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct RowWindow {
    pub rows: Range<usize>,
    pub top_spacer: f32,
    pub bottom_spacer: f32,
}

impl RowWindow {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes the rows visible at `scroll_offset` in a viewport of
/// `viewport_height`, extended by `overscan` rows on each side.
#[must_use]
pub fn visible_rows(
    scroll_offset: f32,
    viewport_height: f32,
    row_height: f32,
    row_count: usize,
    overscan: usize,
) -> RowWindow {
    if row_count == 0 {
        return RowWindow {
            rows: 0..0,
            top_spacer: 0.0,
            bottom_spacer: 0.0,
        };
    }

    if row_height <= 0.0 {
        return RowWindow {
            rows: 0..row_count,
            top_spacer: 0.0,
            bottom_spacer: 0.0,
        };
    }

    let offset = scroll_offset.max(0.0);
    let viewport = viewport_height.max(0.0);

    let first = (offset / row_height).floor() as usize;
    let last = ((offset + viewport) / row_height).ceil() as usize;

    let end = last.saturating_add(overscan).min(row_count);
    let start = first.saturating_sub(overscan).min(end);

    RowWindow {
        rows: start..end,
        top_spacer: start as f32 * row_height,
        bottom_spacer: (row_count - end) as f32 * row_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_list_renders_viewport_plus_overscan() {
        let window = visible_rows(0.0, 600.0, 120.0, 100, 2);
        assert_eq!(window.rows, 0..7);
        assert_eq!(window.top_spacer, 0.0);
        assert_eq!(window.bottom_spacer, 93.0 * 120.0);
    }

    #[test]
    fn scrolled_window_adds_spacers_on_both_sides() {
        let window = visible_rows(1200.0, 600.0, 120.0, 100, 2);
        assert_eq!(window.rows, 8..17);
        assert_eq!(window.top_spacer, 8.0 * 120.0);
        assert_eq!(window.bottom_spacer, 83.0 * 120.0);
    }

    #[test]
    fn window_is_clamped_to_row_count() {
        let window = visible_rows(100_000.0, 600.0, 120.0, 10, 2);
        assert_eq!(window.rows, 10..10);
        assert!(window.is_empty());
        assert_eq!(window.top_spacer, 1200.0);
        assert_eq!(window.bottom_spacer, 0.0);
    }

    #[test]
    fn no_rows_means_empty_window() {
        let window = visible_rows(0.0, 600.0, 120.0, 0, 2);
        assert!(window.is_empty());
    }

    #[test]
    fn spacers_and_rows_add_up_to_content_height() {
        let row_height = 120.0;
        let row_count = 42;
        for offset in [0.0, 333.0, 2400.0, 4000.0] {
            let window = visible_rows(offset, 500.0, row_height, row_count, 2);
            let rendered = window.rows.len() as f32 * row_height;
            let total = window.top_spacer + rendered + window.bottom_spacer;
            assert_eq!(total, row_count as f32 * row_height);
        }
    }
}
