// SPDX-License-Identifier: MPL-2.0
//! Virtualized gallery grid.
//!
//! Only the rows of the current [`RowWindow`] are built; spacers above and
//! below stand in for the rest so the scrollbar reflects the full list.

use crate::domain::gallery::ImageItem;
use crate::domain::layout::{GridLayout, RowWindow};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::card;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{alignment, Element, Length};
use std::time::{Duration, Instant};

/// Identifier of the grid scrollable, used to reset the scroll position.
pub const SCROLLABLE_ID: &str = "gallery-grid-scrollable";

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    Card(card::Message),
    /// The scroll position or the viewport size changed.
    Scrolled { offset_y: f32, viewport_height: f32 },
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [ImageItem],
    pub layout: GridLayout,
    pub window: RowWindow,
    pub cards: &'a card::Registry,
    pub cache: &'a ImageCache,
    pub now: Instant,
    pub spin_elapsed: Duration,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.items.is_empty() {
        return empty_state(ctx.i18n);
    }

    let row_height = ctx.layout.row_height as f32;
    let column_width = ctx.layout.column_width as f32;
    let columns = ctx.layout.column_count as usize;

    let mut content = Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(ctx.window.top_spacer)));

    for row_index in ctx.window.rows.clone() {
        let mut row = Row::new().height(Length::Fixed(row_height));
        for column in 0..columns {
            let Some(index) = ctx.layout.item_index(row_index, column, ctx.items.len()) else {
                break;
            };
            let item = &ctx.items[index];
            let card = card::view(card::ViewContext {
                i18n: ctx.i18n,
                item,
                state: ctx.cards.state(&item.url),
                image: ctx.cache.peek(&item.url),
                width: column_width,
                height: row_height,
                now: ctx.now,
                spin_elapsed: ctx.spin_elapsed,
            });
            row = row.push(card.map(Message::Card));
        }
        content = content.push(row);
    }

    content = content.push(Space::new().height(Length::Fixed(ctx.window.bottom_spacer)));

    Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(
            Scrollbar::new().width(sizing::SCROLLBAR_GUTTER / 2.0),
        ))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        })
        .into()
}

fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("gallery-empty"))
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
