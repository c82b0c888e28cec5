// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components return effects; the handlers here turn them into tasks
//! (image loads, downloads, the search debounce timer and scroll resets).

use super::{paths, App, GalleryLoad, Message, HEADER_HEIGHT};
use crate::config::defaults::{GRID_OVERSCAN_ROWS, SEARCH_DEBOUNCE_MS, THUMBNAIL_RADIUS};
use crate::domain::gallery::filter_and_sort;
use crate::domain::layout::visible_rows;
use crate::domain::navigation::{index_of_url, thumbnail_window};
use crate::error::Error;
use crate::media::{save_to_downloads, LoadedImage};
use crate::ui::{card, grid, lightbox, search_bar};
use fluent_bundle::FluentValue;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::GalleryLoaded(load) => handle_gallery_loaded(app, load),
        Message::SearchBar(msg) => handle_search_bar_message(app, msg),
        Message::Grid(msg) => handle_grid_message(app, msg),
        Message::Lightbox(msg) => {
            let closing = matches!(msg, lightbox::Message::Close);
            let effect = app.lightbox.handle(msg, app.displayed.len());
            let task = handle_lightbox_effect(app, effect);
            if closing {
                // Lightbox loads may have evicted visible cards.
                Task::batch([task, request_visible_cards(app)])
            } else {
                task
            }
        }
        Message::CardLoaded {
            url,
            generation,
            result,
        } => {
            handle_card_loaded(app, &url, generation, result);
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            app.viewport_height = (size.height - HEADER_HEIGHT).max(0.0);
            request_visible_cards(app)
        }
        Message::Tick(now) => {
            app.now = now;
            Task::none()
        }
        Message::DownloadFinished(result) => {
            handle_download_finished(app, result);
            Task::none()
        }
    }
}

fn handle_gallery_loaded(app: &mut App, load: GalleryLoad) -> Task<Message> {
    let GalleryLoad {
        items,
        base_dir,
        failed_source,
    } = load;

    if let Some(source) = failed_source {
        let text = app.i18n.tr_with_args(
            "gallery-source-fallback",
            &[("source", FluentValue::from(source))],
        );
        app.status.push(text);
    }

    app.loader.set_base_dir(base_dir);
    app.all = Arc::from(items);
    app.cards.reset();
    app.gallery_ready = true;

    apply_filter(app)
}

fn handle_search_bar_message(app: &mut App, message: search_bar::Message) -> Task<Message> {
    match app.search.handle(message) {
        search_bar::Effect::None => Task::none(),
        search_bar::Effect::ScheduleApply(generation) => Task::perform(
            tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            move |()| Message::SearchBar(search_bar::Message::DebounceElapsed(generation)),
        ),
        search_bar::Effect::Apply => apply_filter(app),
    }
}

/// Recomputes the displayed list from the current options.
///
/// The lightbox is kept on the same position when it still exists, and the
/// grid scrolls back to the top.
fn apply_filter(app: &mut App) -> Task<Message> {
    let shown_url = app
        .lightbox
        .current_index()
        .and_then(|index| app.displayed.get(index))
        .map(|item| item.url.clone());

    app.displayed = filter_and_sort(&app.all, app.options());
    tracing::debug!(
        total = app.all.len(),
        displayed = app.displayed.len(),
        search = %app.options().search_term,
        cache_hit_rate = app.loader.cache().stats().hit_rate(),
        "Applied filter"
    );

    let reference_changed = match (app.lightbox.current_index(), shown_url) {
        (Some(index), Some(url)) => app.displayed.get(index).map(|item| &item.url) != Some(&url),
        _ => false,
    };
    let effect = app
        .lightbox
        .revalidate(app.displayed.len(), reference_changed);
    let lightbox_task = handle_lightbox_effect(app, effect);

    app.scroll_offset = 0.0;
    let scroll_task = operation::snap_to(
        Id::new(grid::SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    );

    Task::batch([lightbox_task, scroll_task, request_visible_cards(app)])
}

fn handle_grid_message(app: &mut App, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::Card(card::Message::Pressed(url)) => {
            let index = index_of_url(app.displayed.iter().map(|item| item.url.as_str()), &url);
            let effect = app.lightbox.open(index, app.displayed.len());
            handle_lightbox_effect(app, effect)
        }
        grid::Message::Scrolled {
            offset_y,
            viewport_height,
        } => {
            app.scroll_offset = offset_y;
            app.viewport_height = viewport_height;
            request_visible_cards(app)
        }
    }
}

fn handle_lightbox_effect(app: &mut App, effect: lightbox::Effect) -> Task<Message> {
    match effect {
        lightbox::Effect::None => Task::none(),
        lightbox::Effect::LoadImage { index, generation } => {
            let Some(item) = app.displayed.get(index) else {
                return Task::none();
            };
            let loader = app.loader.clone();
            let url = item.url.clone();
            let image_task = Task::perform(async move { loader.load(url).await }, move |result| {
                Message::Lightbox(lightbox::Message::ImageLoaded { generation, result })
            });

            let thumbnails = thumbnail_window(index, app.displayed.len(), THUMBNAIL_RADIUS);
            Task::batch([image_task, request_cards(app, thumbnails)])
        }
        lightbox::Effect::Download { index } => {
            let Some(item) = app.displayed.get(index) else {
                return Task::none();
            };
            tracing::info!(url = %item.url, index, "Downloading image");
            Task::perform(
                save_to_downloads(
                    app.loader.clone(),
                    item.url.clone(),
                    index,
                    paths::get_download_dir(),
                ),
                Message::DownloadFinished,
            )
        }
    }
}

fn handle_card_loaded(
    app: &mut App,
    url: &str,
    generation: u64,
    result: Result<LoadedImage, Error>,
) {
    if let Err(err) = &result {
        tracing::warn!(url, error = %err, "Card image failed to load");
    }
    app.now = Instant::now();
    if !app.cards.finish(url, generation, result.is_ok(), app.now) {
        tracing::debug!(url, generation, "Dropping stale card load");
    }
}

fn handle_download_finished(app: &mut App, result: Result<PathBuf, Error>) {
    app.notice = Some(match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Image saved");
            app.i18n.tr_with_args(
                "notification-download-saved",
                &[("path", FluentValue::from(path.display().to_string()))],
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "Image download failed");
            app.i18n.tr_with_args(
                "notification-download-failed",
                &[("reason", FluentValue::from(app.i18n.tr(err.i18n_key())))],
            )
        }
    });
}

/// Starts loads for the cards in the visible row window.
fn request_visible_cards(app: &mut App) -> Task<Message> {
    let layout = app.grid_layout();
    let window = visible_rows(
        app.scroll_offset,
        app.viewport_height,
        layout.row_height as f32,
        layout.row_count(app.displayed.len()),
        GRID_OVERSCAN_ROWS,
    );
    let range = layout.item_range(window.rows, app.displayed.len());
    request_cards(app, range)
}

/// Starts loads for the displayed items in `range` that have no card state
/// yet or whose image left the cache.
fn request_cards(app: &mut App, range: std::ops::Range<usize>) -> Task<Message> {
    let end = range.end.min(app.displayed.len());
    let start = range.start.min(end);

    let tasks: Vec<Task<Message>> = app.displayed[start..end]
        .iter()
        .filter_map(|item| {
            let generation = app.cards.begin_load(&item.url, app.loader.cache())?;
            let loader = app.loader.clone();
            let url = item.url.clone();
            Some(Task::perform(
                async move {
                    let result = loader.load(url.clone()).await;
                    (url, result)
                },
                move |(url, result)| Message::CardLoaded {
                    url,
                    generation,
                    result,
                },
            ))
        })
        .collect();

    if tasks.is_empty() {
        Task::none()
    } else {
        tracing::trace!(count = tasks.len(), "Requesting card images");
        Task::batch(tasks)
    }
}
