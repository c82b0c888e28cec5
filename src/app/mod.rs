// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search bar, the
//! grid and the lightbox.
//!
//! The `App` struct owns the full record set, the displayed (filtered and
//! sorted) list and the component states, and translates component effects
//! into image loads, downloads and scroll operations.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, GalleryLoad, Message};

use crate::application::port::ImageRecordSource;
use crate::config;
use crate::domain::gallery::{FilterOptions, ImageItem, SelectionPolicy};
use crate::domain::layout::{GridLayout, GridParams};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{EmbeddedGallerySource, JsonGallerySource};
use crate::media::{ImageCache, ImageLoader};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ThemeMode;
use crate::ui::{card, lightbox, search_bar};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Height taken by the search bar above the grid.
const HEADER_HEIGHT: f32 = sizing::INPUT_HEIGHT + 16.0;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    loader: ImageLoader,
    grid_params: GridParams,
    /// Every record from the source, fixed after startup.
    all: Arc<[ImageItem]>,
    /// `all` after search and sort.
    displayed: Vec<ImageItem>,
    gallery_ready: bool,
    search: search_bar::State,
    cards: card::Registry,
    lightbox: lightbox::State,
    window_size: Size,
    scroll_offset: f32,
    viewport_height: f32,
    /// Translated warnings shown above the grid.
    status: Vec<String>,
    /// Outcome of the last download.
    notice: Option<String>,
    started_at: Instant,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("records", &self.all.len())
            .field("displayed", &self.displayed.len())
            .field("lightbox", &self.lightbox.current_index())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot; flags are cheap to clone.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state and starts loading the gallery source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let cache = ImageCache::new(config.cache.max_images());
        let loader = ImageLoader::new(
            flags.fetcher.clone(),
            config.remote.allow_list(),
            cache,
            None,
        );

        let mut options = config.gallery.initial_filter_options();
        if let Some(term) = flags.search.clone() {
            options.search_term = term;
        }

        let status = config_warning.iter().map(|key| i18n.tr(key)).collect();
        let now = Instant::now();

        let app = App {
            theme_mode: config.general.theme_mode,
            loader,
            grid_params: config.grid.params(),
            all: Arc::from(Vec::<ImageItem>::new()),
            displayed: Vec::new(),
            gallery_ready: false,
            search: search_bar::State::new(options),
            cards: card::Registry::default(),
            lightbox: lightbox::State::new(
                config.lightbox.zoom_step(),
                config.lightbox.swipe_threshold(),
            ),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            scroll_offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32 - HEADER_HEIGHT,
            status,
            notice: None,
            started_at: now,
            now,
            i18n,
        };

        let policy = config.gallery.selection_policy();
        let data_file = flags.data_file.or(config.gallery.data_file);
        tracing::info!(
            data_file = ?data_file,
            cache_capacity = app.loader.cache().capacity(),
            locale = %app.i18n.current_locale(),
            "Starting gallery"
        );

        let task = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || load_gallery(data_file.as_deref(), policy))
                    .await
                    .unwrap_or_else(|err| {
                        tracing::warn!(error = %err, "Gallery load task failed");
                        GalleryLoad::default()
                    })
            },
            Message::GalleryLoaded,
        );

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize_sub = subscription::create_resize_subscription();
        let lightbox_sub = subscription::create_lightbox_subscription(self.lightbox.is_open());
        let tick_sub = subscription::create_tick_subscription(self.is_animating());

        Subscription::batch([resize_sub, lightbox_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Grid geometry for the current window width.
    fn grid_layout(&self) -> GridLayout {
        let width = (self.window_size.width - sizing::SCROLLBAR_GUTTER).max(0.0);
        GridLayout::compute(width as u32, &self.grid_params)
    }

    fn options(&self) -> &FilterOptions {
        self.search.options()
    }

    fn is_animating(&self) -> bool {
        if !self.gallery_ready || self.cards.is_animating(self.now) {
            return true;
        }
        self.lightbox.is_open()
            && self.lightbox.image().is_none()
            && !self
                .lightbox
                .navigator()
                .viewing()
                .is_some_and(|viewing| viewing.image_error())
    }
}

/// Reads the gallery from `data_file`, or the bundled data when absent or
/// unreadable.
fn load_gallery(data_file: Option<&Path>, policy: SelectionPolicy) -> GalleryLoad {
    let mut failed_source = None;

    if let Some(path) = data_file {
        let source = JsonGallerySource::new(path);
        match source.load_records(policy) {
            Ok(items) => {
                tracing::info!(source = %source.describe(), count = items.len(), "Gallery loaded");
                return GalleryLoad {
                    items,
                    base_dir: source.base_dir().map(Path::to_path_buf),
                    failed_source: None,
                };
            }
            Err(err) => {
                tracing::warn!(source = %source.describe(), error = %err, "Falling back to bundled gallery");
                failed_source = Some(path.display().to_string());
            }
        }
    }

    let source = EmbeddedGallerySource;
    let items = match source.load_records(policy) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(source = %source.describe(), error = %err, "Bundled gallery unreadable");
            Vec::new()
        }
    };
    tracing::info!(source = %source.describe(), count = items.len(), "Gallery loaded");

    GalleryLoad {
        items,
        base_dir: None,
        failed_source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_data_file_falls_back_to_bundled_gallery() {
        let load = load_gallery(
            Some(Path::new("/definitely/not/here.json")),
            SelectionPolicy::default(),
        );

        assert!(!load.items.is_empty());
        assert_eq!(load.failed_source.as_deref(), Some("/definitely/not/here.json"));
        assert_eq!(load.base_dir, None);
    }

    #[test]
    fn data_file_records_and_base_dir_are_used() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Local", "images": ["a.png", "b.png"]}}]"#
        )
        .unwrap();

        let load = load_gallery(Some(file.path()), SelectionPolicy::default());

        assert_eq!(load.items.len(), 1);
        assert_eq!(load.items[0].url, "b.png");
        assert_eq!(load.failed_source, None);
        assert_eq!(load.base_dir.as_deref(), file.path().parent());
    }

    #[test]
    fn no_data_file_uses_bundled_gallery_silently() {
        let load = load_gallery(None, SelectionPolicy::default());
        assert!(!load.items.is_empty());
        assert_eq!(load.failed_source, None);
    }
}
