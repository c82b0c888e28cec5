// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state machine.
//!
//! The lightbox is either closed or showing one image of the displayed list.
//! Every transition that changes the shown image resets zoom, the error flag
//! and the cached natural size.

use crate::domain::ui::{ZoomLevel, ZoomStep};

/// Per-image view state while the lightbox is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewing {
    index: usize,
    zoom: ZoomLevel,
    image_error: bool,
    natural_size: Option<(u32, u32)>,
}

impl Viewing {
    fn at(index: usize) -> Self {
        Self {
            index,
            zoom: ZoomLevel::default(),
            image_error: false,
            natural_size: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn image_error(&self) -> bool {
        self.image_error
    }

    #[must_use]
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.natural_size
    }
}

/// Lightbox state: `Closed` or `Open` on one index.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Navigator {
    #[default]
    Closed,
    Open(Viewing),
}

impl Navigator {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Navigator::Open(_))
    }

    #[must_use]
    pub fn viewing(&self) -> Option<&Viewing> {
        match self {
            Navigator::Open(viewing) => Some(viewing),
            Navigator::Closed => None,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.viewing().map(Viewing::index)
    }

    /// Opens on `index` within a list of `len` images.
    ///
    /// Refused when the list is empty. Out-of-range indices are clamped to
    /// the last image. Returns `true` if the lightbox is now open.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        *self = Navigator::Open(Viewing::at(index.min(len - 1)));
        true
    }

    pub fn close(&mut self) {
        *self = Navigator::Closed;
    }

    /// Moves to the following image, wrapping to the first.
    ///
    /// No-op when closed or when there is at most one image. Returns `true`
    /// if the shown image changed.
    pub fn next(&mut self, len: usize) -> bool {
        self.step(len, |index| (index + 1) % len)
    }

    /// Moves to the preceding image, wrapping to the last.
    pub fn previous(&mut self, len: usize) -> bool {
        self.step(len, |index| (index + len - 1) % len)
    }

    fn step(&mut self, len: usize, advance: impl FnOnce(usize) -> usize) -> bool {
        match self {
            Navigator::Open(viewing) if len > 1 => {
                *viewing = Viewing::at(advance(viewing.index.min(len - 1)));
                true
            }
            _ => false,
        }
    }

    /// Jumps straight to `index`, as a thumbnail click does.
    ///
    /// Ignored when closed or when `index` is out of range.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        match self {
            Navigator::Open(viewing) if index < len => {
                *viewing = Viewing::at(index);
                true
            }
            _ => false,
        }
    }

    /// Keeps the index valid after the displayed list changed to `len`
    /// images.
    ///
    /// Closes on an empty list and clamps an index past the end to the last
    /// image. Returns `true` if the shown index changed.
    pub fn revalidate(&mut self, len: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        if len == 0 {
            self.close();
            return true;
        }
        if let Navigator::Open(viewing) = self {
            if viewing.index >= len {
                *viewing = Viewing::at(len - 1);
                return true;
            }
        }
        false
    }

    pub fn zoom_in(&mut self, step: ZoomStep) {
        if let Navigator::Open(viewing) = self {
            viewing.zoom = viewing.zoom.zoom_in(step);
        }
    }

    pub fn zoom_out(&mut self, step: ZoomStep) {
        if let Navigator::Open(viewing) = self {
            viewing.zoom = viewing.zoom.zoom_out(step);
        }
    }

    /// Flags the current image as failed. Navigation is unaffected.
    pub fn mark_error(&mut self) {
        if let Navigator::Open(viewing) = self {
            viewing.image_error = true;
        }
    }

    /// Caches the decoded dimensions of the current image.
    pub fn set_natural_size(&mut self, width: u32, height: u32) {
        if let Navigator::Open(viewing) = self {
            viewing.natural_size = Some((width, height));
        }
    }
}

/// Position of `url` in `urls`, or 0 when absent.
#[must_use]
pub fn index_of_url<'a>(urls: impl IntoIterator<Item = &'a str>, url: &str) -> usize {
    urls.into_iter().position(|u| u == url).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(index: usize, len: usize) -> Navigator {
        let mut nav = Navigator::default();
        assert!(nav.open(index, len));
        nav
    }

    #[test]
    fn starts_closed() {
        let nav = Navigator::default();
        assert!(!nav.is_open());
        assert_eq!(nav.current_index(), None);
    }

    #[test]
    fn open_refused_on_empty_list() {
        let mut nav = Navigator::default();
        assert!(!nav.open(0, 0));
        assert!(!nav.is_open());
    }

    #[test]
    fn open_clamps_index() {
        assert_eq!(opened(9, 3).current_index(), Some(2));
    }

    #[test]
    fn previous_from_two_goes_to_one() {
        let mut nav = opened(2, 5);
        assert!(nav.previous(5));
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut nav = opened(0, 5);
        nav.previous(5);
        assert_eq!(nav.current_index(), Some(4));
    }

    #[test]
    fn next_from_last_wraps_to_zero() {
        let mut nav = opened(4, 5);
        nav.next(5);
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn n_steps_return_to_start() {
        let len = 7;
        for start in 0..len {
            let mut forward = opened(start, len);
            let mut backward = opened(start, len);
            for _ in 0..len {
                forward.next(len);
                backward.previous(len);
            }
            assert_eq!(forward.current_index(), Some(start));
            assert_eq!(backward.current_index(), Some(start));
        }
    }

    #[test]
    fn single_image_does_not_navigate() {
        let mut nav = opened(0, 1);
        assert!(!nav.next(1));
        assert!(!nav.previous(1));
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn navigation_resets_zoom_and_error() {
        let mut nav = opened(0, 3);
        nav.zoom_in(ZoomStep::default());
        nav.mark_error();
        nav.set_natural_size(800, 600);

        nav.next(3);
        let viewing = nav.viewing().unwrap();
        assert_eq!(viewing.zoom(), ZoomLevel::default());
        assert!(!viewing.image_error());
        assert_eq!(viewing.natural_size(), None);
    }

    #[test]
    fn select_jumps_and_ignores_out_of_range() {
        let mut nav = opened(0, 10);
        assert!(nav.select(7, 10));
        assert_eq!(nav.current_index(), Some(7));
        assert!(!nav.select(10, 10));
        assert_eq!(nav.current_index(), Some(7));
    }

    #[test]
    fn closed_navigator_ignores_transitions() {
        let mut nav = Navigator::default();
        assert!(!nav.next(3));
        assert!(!nav.previous(3));
        assert!(!nav.select(1, 3));
        nav.zoom_in(ZoomStep::default());
        assert!(!nav.is_open());
    }

    #[test]
    fn close_returns_to_closed() {
        let mut nav = opened(1, 3);
        nav.close();
        assert_eq!(nav, Navigator::Closed);
    }

    #[test]
    fn revalidate_clamps_and_closes() {
        let mut nav = opened(4, 5);
        assert!(nav.revalidate(3));
        assert_eq!(nav.current_index(), Some(2));
        assert!(!nav.revalidate(3));
        assert!(nav.revalidate(0));
        assert!(!nav.is_open());
    }

    #[test]
    fn error_flag_keeps_navigation_state() {
        let mut nav = opened(2, 5);
        nav.mark_error();
        assert_eq!(nav.current_index(), Some(2));
        assert!(nav.viewing().unwrap().image_error());
    }

    #[test]
    fn index_of_url_falls_back_to_zero() {
        let urls = ["a", "b", "c"];
        assert_eq!(index_of_url(urls, "c"), 2);
        assert_eq!(index_of_url(urls, "missing"), 0);
    }
}
