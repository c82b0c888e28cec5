// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery (search bar, status lines and grid) is always rendered; the
//! lightbox is stacked above it while open.

use super::{App, Message};
use crate::config::defaults::GRID_OVERSCAN_ROWS;
use crate::domain::layout::visible_rows;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use crate::ui::{grid, lightbox, search_bar};
use iced::widget::{opaque, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the gallery and, when open, the lightbox above it.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let gallery = view_gallery(app);

    if !app.lightbox.is_open() {
        return gallery;
    }

    let overlay = lightbox::view(lightbox::ViewContext {
        i18n: &app.i18n,
        state: &app.lightbox,
        items: &app.displayed,
        cache: app.loader.cache(),
        window_size: app.window_size,
        spin_elapsed: app.now.saturating_duration_since(app.started_at),
    })
    .map(Message::Lightbox);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(gallery)
        .push(opaque(overlay))
        .into()
}

fn view_gallery(app: &App) -> Element<'_, Message> {
    let search = search_bar::view(search_bar::ViewContext {
        i18n: &app.i18n,
        state: &app.search,
        result_count: app.displayed.len(),
    })
    .map(Message::SearchBar);

    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .push(search);

    for line in app.status.iter().chain(app.notice.iter()) {
        column = column.push(
            Container::new(Text::new(line.as_str()).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::status_warning),
        );
    }

    let body: Element<'_, Message> = if app.gallery_ready {
        view_grid(app)
    } else {
        view_loading(app)
    };

    column.push(body).into()
}

fn view_grid(app: &App) -> Element<'_, Message> {
    let layout = app.grid_layout();
    let window = visible_rows(
        app.scroll_offset,
        app.viewport_height,
        layout.row_height as f32,
        layout.row_count(app.displayed.len()),
        GRID_OVERSCAN_ROWS,
    );

    grid::view(grid::ViewContext {
        i18n: &app.i18n,
        items: &app.displayed,
        layout,
        window,
        cards: &app.cards,
        cache: app.loader.cache(),
        now: app.now,
        spin_elapsed: app.now.saturating_duration_since(app.started_at),
    })
    .map(Message::Grid)
}

fn view_loading(app: &App) -> Element<'_, Message> {
    let rotation =
        animated_spinner::rotation_at(app.now.saturating_duration_since(app.started_at));
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element();

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(Text::new(app.i18n.tr("gallery-loading")).size(typography::BODY_LG));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
