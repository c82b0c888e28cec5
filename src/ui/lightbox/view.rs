// SPDX-License-Identifier: MPL-2.0
//! Lightbox rendering: toolbar, image, arrows and thumbnail strip.

use super::{Message, State};
use crate::config::defaults::{THUMBNAIL_RADIUS, THUMBNAIL_SIZE};
use crate::domain::gallery::ImageItem;
use crate::domain::navigation::thumbnail_window;
use crate::domain::ui::ZoomLevel;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use fluent_bundle::FluentValue;
use iced::widget::tooltip::{self, Tooltip};
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Size};
use std::time::Duration;

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub items: &'a [ImageItem],
    /// Source of thumbnail images.
    pub cache: &'a ImageCache,
    pub window_size: Size,
    pub spin_elapsed: Duration,
}

/// Layout size of an image of `natural` size inside `available`.
///
/// The image is scaled down to fit, never up. Zoom is applied at draw time
/// and does not change this size.
#[must_use]
pub fn fitted_size(natural: (u32, u32), available: Size) -> Size {
    let (width, height) = (natural.0 as f32, natural.1 as f32);
    if width <= 0.0 || height <= 0.0 {
        return Size::ZERO;
    }
    let fit = (available.width.max(0.0) / width)
        .min(available.height.max(0.0) / height)
        .min(1.0);
    Size::new(width * fit, height * fit)
}

/// Layout size and draw scale of the current image.
fn image_geometry(natural: (u32, u32), available: Size, zoom: ZoomLevel) -> (Size, f32) {
    (fitted_size(natural, available), zoom.value())
}

/// Room left for the image once toolbar, arrows and strip are laid out.
fn image_area(window: Size, len: usize) -> Size {
    let arrows = if len > 1 {
        2.0 * (sizing::NAV_ARROW + spacing::MD)
    } else {
        0.0
    };
    let strip = if len > 1 {
        sizing::THUMBNAIL_STRIP_HEIGHT
    } else {
        0.0
    };
    Size::new(
        window.width - arrows - 2.0 * spacing::MD,
        window.height - sizing::LIGHTBOX_TOOLBAR_HEIGHT - strip - 2.0 * spacing::MD,
    )
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(viewing) = ctx.state.navigator().viewing() else {
        return Space::new().into();
    };
    let len = ctx.items.len();
    let index = viewing.index();

    let mut content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(toolbar(&ctx, index, len));

    let stage = stage(&ctx, index, len);
    let centre: Element<'a, Message> = if len > 1 {
        Row::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(arrow(ctx.i18n, "‹", "lightbox-previous", Message::Previous))
            .push(stage)
            .push(arrow(ctx.i18n, "›", "lightbox-next", Message::Next))
            .height(Length::Fill)
            .into()
    } else {
        Container::new(stage)
            .padding(spacing::MD)
            .height(Length::Fill)
            .into()
    };
    content = content.push(centre);

    if len > 1 {
        content = content.push(thumbnail_strip(&ctx, index, len));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop)
        .into()
}

fn toolbar<'a>(ctx: &ViewContext<'a>, index: usize, len: usize) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let position = i18n.tr_with_args(
        "lightbox-position",
        &[
            ("current", FluentValue::from(index + 1)),
            ("total", FluentValue::from(len)),
        ],
    );
    let badge = Container::new(Text::new(position).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::FULL));

    let zoom = ctx
        .state
        .navigator()
        .viewing()
        .map(|viewing| viewing.zoom())
        .unwrap_or_default();
    let zoom_label = i18n.tr_with_args(
        "lightbox-zoom-level",
        &[("percent", FluentValue::from(zoom.as_percent()))],
    );

    let control = |label: String, message: Option<Message>| {
        button(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press_maybe(message)
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(badge)
        .push(Space::new().width(Length::Fill))
        .push(control(
            i18n.tr("lightbox-zoom-out"),
            (!zoom.is_min()).then_some(Message::ZoomOut),
        ))
        .push(Text::new(zoom_label).size(typography::CAPTION))
        .push(control(
            i18n.tr("lightbox-zoom-in"),
            (!zoom.is_max()).then_some(Message::ZoomIn),
        ))
        .push(control(i18n.tr("lightbox-download"), Some(Message::Download)))
        .push(control(i18n.tr("lightbox-close"), Some(Message::Close)));

    Container::new(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LIGHTBOX_TOOLBAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::controls_container)
        .into()
}

/// The current image, its spinner or the failure text.
fn stage<'a>(ctx: &ViewContext<'a>, index: usize, len: usize) -> Element<'a, Message> {
    let body: Element<'a, Message> = match (ctx.state.image(), ctx.state.navigator().viewing()) {
        (_, Some(viewing)) if viewing.image_error() => {
            let counter = ctx.i18n.tr_with_args(
                "lightbox-image-counter",
                &[
                    ("current", FluentValue::from(index + 1)),
                    ("total", FluentValue::from(len)),
                ],
            );
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(ctx.i18n.tr("lightbox-image-error")).size(typography::BODY_LG))
                .push(Text::new(counter).size(typography::CAPTION))
                .into()
        }
        (Some(loaded), Some(viewing)) => {
            let (size, scale) = image_geometry(
                (loaded.width(), loaded.height()),
                image_area(ctx.window_size, len),
                viewing.zoom(),
            );
            image::Image::new(loaded.handle().clone())
                .width(Length::Fixed(size.width))
                .height(Length::Fixed(size.height))
                .content_fit(ContentFit::Contain)
                .scale(scale)
                .into()
        }
        _ => AnimatedSpinner::new(palette::WHITE, animated_spinner::rotation_at(ctx.spin_elapsed))
            .into_element(),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .into()
}

fn arrow<'a>(
    i18n: &I18n,
    glyph: &'a str,
    key: &str,
    message: Message,
) -> Element<'a, Message> {
    let arrow = button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::NAV_ARROW))
    .height(Length::Fixed(sizing::NAV_ARROW))
    .on_press(message)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    Tooltip::new(
        arrow,
        Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}

fn thumbnail_strip<'a>(ctx: &ViewContext<'a>, index: usize, len: usize) -> Element<'a, Message> {
    let strip = thumbnail_window(index, len, THUMBNAIL_RADIUS).fold(
        Row::new().spacing(spacing::XS),
        |row, position| {
            let item = &ctx.items[position];
            let face: Element<'a, Message> = match ctx.cache.peek(&item.url) {
                Some(loaded) => image::Image::new(loaded.handle().clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => Container::new(Text::new((position + 1).to_string()).size(typography::CAPTION))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center)
                    .into(),
            };

            row.push(
                button(face)
                    .padding(sizing::CARD_GAP / 2.0)
                    .width(Length::Fixed(THUMBNAIL_SIZE))
                    .height(Length::Fixed(THUMBNAIL_SIZE))
                    .on_press(Message::Select(position))
                    .style(styles::button::thumbnail(position == index)),
            )
        },
    );

    Container::new(strip)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_STRIP_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::controls_container)
        .into()
}
