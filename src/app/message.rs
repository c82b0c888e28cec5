// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::ImageItem;
use crate::error::Error;
use crate::infrastructure::HttpFetcher;
use crate::media::LoadedImage;
use crate::ui::{grid, lightbox, search_bar};
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    GalleryLoaded(GalleryLoad),
    SearchBar(search_bar::Message),
    Grid(grid::Message),
    Lightbox(lightbox::Message),
    /// A grid card finished loading.
    CardLoaded {
        url: String,
        generation: u64,
        result: Result<LoadedImage, Error>,
    },
    WindowResized(Size),
    /// Animation frame while spinners turn or cards fade in.
    Tick(Instant),
    DownloadFinished(Result<PathBuf, Error>),
}

/// Records produced by the startup source load.
#[derive(Debug, Clone, Default)]
pub struct GalleryLoad {
    pub items: Vec<ImageItem>,
    /// Directory relative image references resolve against.
    pub base_dir: Option<PathBuf>,
    /// Description of the configured source when it failed and the bundled
    /// gallery was used instead.
    pub failed_source: Option<String>,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional gallery data file (`[{ "name", "images" }]` JSON).
    pub data_file: Option<PathBuf>,
    /// Optional locale override.
    pub lang: Option<String>,
    /// Initial search term.
    pub search: Option<String>,
    /// HTTP client shared by every image fetch.
    pub fetcher: HttpFetcher,
}
