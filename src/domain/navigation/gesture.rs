// SPDX-License-Identifier: MPL-2.0
//! Swipe classification and the thumbnail strip window.

use std::ops::Range;

/// Navigation requested by a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the following image.
    Next,
    /// Finger moved right: show the preceding image.
    Previous,
}

/// Classifies a horizontal drag from `start_x` to `end_x`.
///
/// Displacements of at most `threshold` in either direction are ignored.
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: f32) -> Option<SwipeDirection> {
    let distance = start_x - end_x;
    if distance > threshold {
        Some(SwipeDirection::Next)
    } else if distance < -threshold {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

/// Indices shown in the thumbnail strip around `current`.
///
/// Covers `radius` images before and after the current one, clipped to the
/// list. Empty when the list has at most one image.
#[must_use]
pub fn thumbnail_window(current: usize, len: usize, radius: usize) -> Range<usize> {
    if len <= 1 {
        return 0..0;
    }
    let start = current.saturating_sub(radius);
    let end = current.saturating_add(radius + 1).min(len);
    start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_left_past_threshold_goes_next() {
        assert_eq!(classify_swipe(200.0, 140.0, 50.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn swipe_right_past_threshold_goes_previous() {
        assert_eq!(
            classify_swipe(140.0, 200.0, 50.0),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn short_swipe_is_ignored() {
        assert_eq!(classify_swipe(200.0, 170.0, 50.0), None);
        assert_eq!(classify_swipe(170.0, 200.0, 50.0), None);
        assert_eq!(classify_swipe(100.0, 50.0, 50.0), None);
    }

    #[test]
    fn thumbnail_window_is_centered_and_clipped() {
        assert_eq!(thumbnail_window(0, 20, 5), 0..6);
        assert_eq!(thumbnail_window(10, 20, 5), 5..16);
        assert_eq!(thumbnail_window(19, 20, 5), 14..20);
        assert_eq!(thumbnail_window(2, 4, 5), 0..4);
    }

    #[test]
    fn thumbnail_window_hidden_for_single_image() {
        assert!(thumbnail_window(0, 1, 5).is_empty());
        assert!(thumbnail_window(0, 0, 5).is_empty());
    }
}
