// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox over the grid.
//!
//! Wraps the [`Navigator`] state machine with what the UI needs around it:
//! the loaded image, the load generation token and the in-progress swipe.
//! The component never sees the item list itself; callers pass its length
//! and resolve indices to references when an [`Effect`] asks for a load.

mod view;

pub use view::{view, ViewContext};

use crate::domain::navigation::{classify_swipe, Navigator, SwipeDirection};
use crate::domain::ui::ZoomStep;
use crate::error::Error;
use crate::media::LoadedImage;

/// Lightbox state.
#[derive(Debug, Clone, Default)]
pub struct State {
    navigator: Navigator,
    /// Token of the load the current image is waiting for.
    generation: u64,
    image: Option<LoadedImage>,
    gesture: Option<Gesture>,
    /// Last known horizontal cursor position.
    cursor_x: Option<f32>,
    zoom_step: ZoomStep,
    swipe_threshold: f32,
}

/// Horizontal drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    start_x: f32,
    last_x: Option<f32>,
}

/// Messages for the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    /// Thumbnail click.
    Select(usize),
    ZoomIn,
    ZoomOut,
    Download,
    ImageLoaded {
        generation: u64,
        result: Result<LoadedImage, Error>,
    },
    /// Touch press at horizontal position `x`.
    GestureStarted(f32),
    GestureMoved(f32),
    GestureEnded,
    CursorMoved(f32),
    /// Left button pressed at the last cursor position.
    MousePressed,
}

/// Effects the parent must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Load the image at `index` and answer with
    /// [`Message::ImageLoaded`] carrying `generation`.
    LoadImage { index: usize, generation: u64 },
    /// Save the image at `index` to the download directory.
    Download { index: usize },
}

impl State {
    #[must_use]
    pub fn new(zoom_step: ZoomStep, swipe_threshold: f32) -> Self {
        Self {
            zoom_step,
            swipe_threshold,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.navigator.is_open()
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigator.current_index()
    }

    #[must_use]
    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// Opens on `index` of a list of `len` items.
    pub fn open(&mut self, index: usize, len: usize) -> Effect {
        if !self.navigator.open(index, len) {
            return Effect::None;
        }
        self.reload()
    }

    pub fn close(&mut self) {
        self.navigator.close();
        self.image = None;
        self.gesture = None;
        // In-flight loads become stale.
        self.generation += 1;
    }

    /// Re-requests the current image, dropping any pending load.
    pub fn reload(&mut self) -> Effect {
        let Some(index) = self.navigator.current_index() else {
            return Effect::None;
        };
        self.generation += 1;
        self.image = None;
        Effect::LoadImage {
            index,
            generation: self.generation,
        }
    }

    /// Keeps the lightbox consistent with a displayed list of `len` items.
    ///
    /// `reference_changed` tells whether the item now at the current index
    /// differs from the one being shown. Returns a load when the shown image
    /// has to change.
    pub fn revalidate(&mut self, len: usize, reference_changed: bool) -> Effect {
        if !self.navigator.is_open() {
            return Effect::None;
        }
        let index_changed = self.navigator.revalidate(len);
        if !self.navigator.is_open() {
            self.close();
            return Effect::None;
        }
        if index_changed || reference_changed {
            self.reload()
        } else {
            Effect::None
        }
    }

    /// Handle a lightbox message for a displayed list of `len` items.
    pub fn handle(&mut self, msg: Message, len: usize) -> Effect {
        match msg {
            Message::Close => {
                self.close();
                Effect::None
            }
            Message::Next => self.navigate(|navigator| navigator.next(len)),
            Message::Previous => self.navigate(|navigator| navigator.previous(len)),
            Message::Select(index) => self.navigate(|navigator| navigator.select(index, len)),
            Message::ZoomIn => {
                self.navigator.zoom_in(self.zoom_step);
                Effect::None
            }
            Message::ZoomOut => {
                self.navigator.zoom_out(self.zoom_step);
                Effect::None
            }
            Message::Download => match self.navigator.current_index() {
                Some(index) => Effect::Download { index },
                None => Effect::None,
            },
            Message::ImageLoaded { generation, result } => {
                self.image_loaded(generation, result);
                Effect::None
            }
            Message::GestureStarted(x) => {
                self.start_gesture(x);
                Effect::None
            }
            Message::GestureMoved(x) => {
                self.track_gesture(x);
                Effect::None
            }
            Message::GestureEnded => self.finish_gesture(len),
            Message::CursorMoved(x) => {
                self.cursor_x = Some(x);
                self.track_gesture(x);
                Effect::None
            }
            Message::MousePressed => {
                if let Some(x) = self.cursor_x {
                    self.start_gesture(x);
                }
                Effect::None
            }
        }
    }

    fn navigate(&mut self, transition: impl FnOnce(&mut Navigator) -> bool) -> Effect {
        if transition(&mut self.navigator) {
            self.reload()
        } else {
            Effect::None
        }
    }

    fn image_loaded(&mut self, generation: u64, result: Result<LoadedImage, Error>) {
        if generation != self.generation || !self.navigator.is_open() {
            tracing::debug!(generation, current = self.generation, "Dropping stale lightbox load");
            return;
        }

        match result {
            Ok(image) => {
                self.navigator.set_natural_size(image.width(), image.height());
                self.image = Some(image);
            }
            Err(err) => {
                tracing::warn!(error = %err, index = ?self.navigator.current_index(), "Lightbox image failed to load");
                self.navigator.mark_error();
            }
        }
    }

    fn start_gesture(&mut self, x: f32) {
        if self.navigator.is_open() {
            self.gesture = Some(Gesture {
                start_x: x,
                last_x: None,
            });
        }
    }

    fn track_gesture(&mut self, x: f32) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.last_x = Some(x);
        }
    }

    fn finish_gesture(&mut self, len: usize) -> Effect {
        let Some(Gesture {
            start_x,
            last_x: Some(end_x),
        }) = self.gesture.take()
        else {
            return Effect::None;
        };

        match classify_swipe(start_x, end_x, self.swipe_threshold) {
            Some(SwipeDirection::Next) => self.navigate(|navigator| navigator.next(len)),
            Some(SwipeDirection::Previous) => self.navigate(|navigator| navigator.previous(len)),
            None => Effect::None,
        }
    }
}
