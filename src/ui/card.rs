// SPDX-License-Identifier: MPL-2.0
//! Grid card: a lazily loaded image with a spinner and a fade-in.
//!
//! Load state lives in a [`Registry`] keyed by image reference so it
//! survives virtualization. The registry only tracks state; pixels stay in
//! the shared [`ImageCache`], and a card whose image was evicted is loaded
//! again the next time it is requested. Every load request carries a
//! generation token; [`Registry::finish`] drops completions whose token is
//! no longer current.

use crate::config::defaults::CARD_FADE_IN_MS;
use crate::domain::gallery::ImageItem;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, LoadedImage};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use iced::widget::{button, image, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;
use std::time::{Duration, Instant};

const FADE_IN: Duration = Duration::from_millis(CARD_FADE_IN_MS);

/// Load state of one image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Loading { generation: u64 },
    Loaded { loaded_at: Instant },
    Failed,
}

/// Messages emitted by cards.
#[derive(Debug, Clone)]
pub enum Message {
    /// The card was clicked; carries the image reference.
    Pressed(String),
}

/// Load states of every card that has been visible at least once.
#[derive(Debug, Default)]
pub struct Registry {
    cards: HashMap<String, CardState>,
    next_generation: u64,
}

impl Registry {
    #[must_use]
    pub fn state(&self, url: &str) -> Option<CardState> {
        self.cards.get(url).copied()
    }

    /// Marks `url` as loading and returns the generation token for the
    /// request.
    ///
    /// Returns `None` when the card is loading or failed, or loaded with its
    /// image still resident in `cache`.
    pub fn begin_load(&mut self, url: &str, cache: &ImageCache) -> Option<u64> {
        match self.cards.get(url) {
            None => {}
            Some(CardState::Loaded { .. }) if !cache.contains(url) => {
                tracing::trace!(url, "Card image evicted, loading again");
            }
            Some(_) => return None,
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        self.cards
            .insert(url.to_string(), CardState::Loading { generation });
        Some(generation)
    }

    /// Records the outcome of the load identified by `generation`.
    ///
    /// Returns `false` and leaves the registry untouched when the request is
    /// stale.
    pub fn finish(&mut self, url: &str, generation: u64, loaded: bool, now: Instant) -> bool {
        let current = matches!(
            self.cards.get(url),
            Some(CardState::Loading { generation: g }) if *g == generation
        );
        if !current {
            return false;
        }

        let state = if loaded {
            CardState::Loaded { loaded_at: now }
        } else {
            CardState::Failed
        };
        self.cards.insert(url.to_string(), state);
        true
    }

    /// Drops every card state so in-flight loads become stale.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Whether a spinner is turning or a fade is in progress.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.values().any(|state| match state {
            CardState::Loading { .. } => true,
            CardState::Loaded { loaded_at } => now.saturating_duration_since(*loaded_at) < FADE_IN,
            CardState::Failed => false,
        })
    }
}

/// Opacity of an image that finished loading at `loaded_at`.
#[must_use]
pub fn fade_opacity(loaded_at: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(loaded_at);
    (elapsed.as_secs_f32() / FADE_IN.as_secs_f32()).clamp(0.0, 1.0)
}

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub item: &'a ImageItem,
    pub state: Option<CardState>,
    /// Image read from the cache, absent when not loaded or evicted.
    pub image: Option<LoadedImage>,
    pub width: f32,
    pub height: f32,
    pub now: Instant,
    pub spin_elapsed: Duration,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let placeholder = |content: Element<'a, Message>| -> Element<'a, Message> {
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::card_placeholder)
            .into()
    };

    let body: Element<'a, Message> = match (ctx.state, ctx.image) {
        (Some(CardState::Loaded { loaded_at }), Some(loaded)) => {
            let opacity = fade_opacity(loaded_at, ctx.now);
            let picture = image::Image::new(loaded.handle().clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .opacity(opacity);

            if opacity < 1.0 {
                Stack::new()
                    .push(placeholder(spinner(ctx.spin_elapsed)))
                    .push(picture)
                    .into()
            } else {
                picture.into()
            }
        }
        (Some(CardState::Failed), _) => placeholder(
            Text::new(ctx.i18n.tr("card-failed"))
                .size(typography::CAPTION)
                .into(),
        ),
        _ => placeholder(spinner(ctx.spin_elapsed)),
    };

    button(body)
        .padding(sizing::CARD_GAP / 2.0)
        .width(Length::Fixed(ctx.width))
        .height(Length::Fixed(ctx.height))
        .on_press(Message::Pressed(ctx.item.url.clone()))
        .style(styles::button::card)
        .into()
}

fn spinner<'a, M: 'static>(elapsed: Duration) -> Element<'a, M> {
    AnimatedSpinner::new(palette::PRIMARY_500, animated_spinner::rotation_at(elapsed))
        .with_size(sizing::ICON_MD + spacing::XS)
        .into_element()
}
