// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Grid**: Column width bounds, column cap, row height, overscan
//! - **Zoom**: Lightbox zoom bounds and step
//! - **Gestures**: Swipe threshold
//! - **Thumbnails**: Thumbnail strip window
//! - **Timing**: Search debounce and card fade-in
//! - **Cache**: In-memory image cache capacity

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Narrowest column the grid lays out before adding another column.
pub const DEFAULT_MIN_COLUMN_WIDTH: u32 = 120;

/// Widest column allowed; wider columns trigger an extra column.
pub const DEFAULT_MAX_COLUMN_WIDTH: u32 = 200;

/// Column count at which the grid stops adding columns to narrow wide ones.
pub const DEFAULT_MAX_COLUMNS: u32 = 20;

/// Fixed height of every grid row.
pub const DEFAULT_ROW_HEIGHT: u32 = 120;

/// Rows rendered above and below the visible window.
pub const GRID_OVERSCAN_ROWS: usize = 2;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal displacement (logical pixels) a swipe must exceed.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Thumbnail Strip Defaults
// ==========================================================================

/// Thumbnails shown on each side of the current image.
pub const THUMBNAIL_RADIUS: usize = 5;

/// Edge length of a thumbnail in the lightbox strip.
pub const THUMBNAIL_SIZE: f32 = 64.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay before a search edit is applied to the grid (milliseconds).
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Duration of the card cross-fade once its image is ready (milliseconds).
pub const CARD_FADE_IN_MS: u64 = 300;

/// Interval of the animation tick while something is loading or fading.
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Number of decoded image payloads kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 256;

/// Lower bound for the configured cache capacity.
pub const MIN_CACHE_MAX_IMAGES: usize = 16;

/// Upper bound for the configured cache capacity.
pub const MAX_CACHE_MAX_IMAGES: usize = 4096;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Position picked inside each gallery's image list by default.
pub const DEFAULT_IMAGE_SELECTION_INDEX: usize = 1;

/// Remote pattern allowed when the config declares none.
pub const DEFAULT_REMOTE_HOSTNAME: &str = "brave.photos";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MIN_COLUMN_WIDTH > 0);
    assert!(DEFAULT_MAX_COLUMN_WIDTH >= DEFAULT_MIN_COLUMN_WIDTH);
    assert!(DEFAULT_MAX_COLUMNS >= 1);
    assert!(DEFAULT_ROW_HEIGHT > 0);

    assert!(DEFAULT_SWIPE_THRESHOLD > 0.0);

    assert!(MIN_CACHE_MAX_IMAGES > 0);
    assert!(DEFAULT_CACHE_MAX_IMAGES >= MIN_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_IMAGES <= MAX_CACHE_MAX_IMAGES);
};
