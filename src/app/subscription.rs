// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are returned only while they are needed; Iced drops the
//! underlying listeners as soon as one is no longer part of the batch.

use super::Message;
use crate::config::defaults::ANIMATION_TICK_MS;
use crate::ui::lightbox;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Window size changes, feeding the grid column computation.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}

/// Keyboard, mouse-drag and touch routing for the open lightbox.
pub fn create_lightbox_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        lightbox_event(&event, status).map(Message::Lightbox)
    })
}

/// Maps a runtime event to a lightbox message.
///
/// - `Escape` closes, `ArrowLeft` / `ArrowRight` navigate
/// - a left press starts a mouse drag whatever its capture status, since
///   the opaque overlay captures every press over the window
/// - a touch press starts a swipe only when no control took it
/// - releases and lifted fingers end the gesture
pub fn lightbox_event(event: &Event, status: event::Status) -> Option<lightbox::Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => match named {
            Named::Escape => Some(lightbox::Message::Close),
            Named::ArrowLeft => Some(lightbox::Message::Previous),
            Named::ArrowRight => Some(lightbox::Message::Next),
            _ => None,
        },
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(lightbox::Message::CursorMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(lightbox::Message::MousePressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(lightbox::Message::GestureEnded)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => match status {
            event::Status::Ignored => Some(lightbox::Message::GestureStarted(position.x)),
            event::Status::Captured => None,
        },
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(lightbox::Message::GestureMoved(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(lightbox::Message::GestureEnded)
        }
        _ => None,
    }
}

/// Animation frames while a spinner turns or a card fades in.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
