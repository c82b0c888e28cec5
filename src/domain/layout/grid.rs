// SPDX-License-Identifier: MPL-2.0
//! Column layout of the gallery grid.

use std::ops::Range;

/// Inputs of the column computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridParams {
    pub min_column_width: u32,
    pub max_column_width: u32,
    pub max_columns: u32,
    pub row_height: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            min_column_width: 120,
            max_column_width: 200,
            max_columns: 20,
            row_height: 120,
        }
    }
}

/// Resolved grid geometry for a given container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub column_count: u32,
    pub column_width: u32,
    pub row_height: u32,
}

impl GridLayout {
    /// Computes the layout for `width` logical pixels.
    ///
    /// Starts with as many `min_column_width` columns as fit (at least one),
    /// then keeps adding columns while they would be wider than
    /// `max_column_width` and fewer than `max_columns` exist. Columns share
    /// the width equally, rounded down.
    #[must_use]
    pub fn compute(width: u32, params: &GridParams) -> Self {
        let min_width = params.min_column_width.max(1);
        let mut columns = (width / min_width).max(1);
        let mut column_width = width / columns;

        while column_width > params.max_column_width && columns < params.max_columns {
            columns += 1;
            column_width = width / columns;
        }

        Self {
            column_count: columns,
            column_width,
            row_height: params.row_height,
        }
    }

    /// Number of rows needed for `item_count` items.
    #[must_use]
    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.column_count as usize)
    }

    /// Index of the item shown in cell (`row`, `column`), if any.
    #[must_use]
    pub fn item_index(&self, row: usize, column: usize, item_count: usize) -> Option<usize> {
        let columns = self.column_count as usize;
        if column >= columns {
            return None;
        }
        let index = row * columns + column;
        (index < item_count).then_some(index)
    }

    /// Items covered by the half-open row range `rows`.
    #[must_use]
    pub fn item_range(&self, rows: Range<usize>, item_count: usize) -> Range<usize> {
        let columns = self.column_count as usize;
        let start = rows.start.saturating_mul(columns).min(item_count);
        let end = rows.end.saturating_mul(columns).min(item_count);
        start..end.max(start)
    }

    /// Total scrollable height of `item_count` items.
    #[must_use]
    pub fn content_height(&self, item_count: usize) -> f32 {
        self.row_count(item_count) as f32 * self.row_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u32) -> GridLayout {
        GridLayout::compute(width, &GridParams::default())
    }

    #[test]
    fn width_1000_gives_eight_columns_of_125() {
        let grid = layout(1000);
        assert_eq!(grid.column_count, 8);
        assert_eq!(grid.column_width, 125);
        assert_eq!(grid.row_height, 120);
    }

    #[test]
    fn narrow_width_still_has_one_column() {
        let grid = layout(50);
        assert_eq!(grid.column_count, 1);
        assert_eq!(grid.column_width, 50);
    }

    #[test]
    fn zero_width_is_guarded() {
        let grid = layout(0);
        assert_eq!(grid.column_count, 1);
        assert_eq!(grid.column_width, 0);
    }

    #[test]
    fn wide_single_column_is_split_until_narrow_enough() {
        // 230 / 120 = 1 column of 230, too wide, so a second column is added.
        let grid = layout(230);
        assert_eq!(grid.column_count, 2);
        assert_eq!(grid.column_width, 115);
    }

    #[test]
    fn column_growth_stops_at_max_columns() {
        let params = GridParams {
            min_column_width: 500,
            max_column_width: 10,
            max_columns: 3,
            row_height: 120,
        };
        let grid = GridLayout::compute(1000, &params);
        assert_eq!(grid.column_count, 3);
        assert_eq!(grid.column_width, 333);
    }

    #[test]
    fn row_count_rounds_up() {
        let grid = layout(1000);
        assert_eq!(grid.row_count(0), 0);
        assert_eq!(grid.row_count(8), 1);
        assert_eq!(grid.row_count(9), 2);
    }

    #[test]
    fn item_index_maps_cells_and_skips_past_end() {
        let grid = layout(1000);
        assert_eq!(grid.item_index(0, 0, 10), Some(0));
        assert_eq!(grid.item_index(1, 1, 10), Some(9));
        assert_eq!(grid.item_index(1, 2, 10), None);
        assert_eq!(grid.item_index(0, 8, 10), None);
    }

    #[test]
    fn item_range_clips_to_item_count() {
        let grid = layout(1000);
        assert_eq!(grid.item_range(0..2, 100), 0..16);
        assert_eq!(grid.item_range(1..3, 17), 8..17);
        assert_eq!(grid.item_range(5..7, 17), 17..17);
    }

    #[test]
    fn content_height_covers_all_rows() {
        let grid = layout(1000);
        assert_eq!(grid.content_height(17), 360.0);
    }
}
