// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image loading.
//!
//! [`ImageLoader::load`] resolves a gallery reference, enforces the remote
//! allow-list, fetches the bytes (network or disk), reads the natural
//! dimensions and stores the result in the shared [`ImageCache`].

use super::cache::ImageCache;
use super::remote::{resolve_reference, AllowList, ImageReference};
use crate::error::{Error, Result};
use crate::infrastructure::http::HttpFetcher;
use bytes::Bytes;
use iced::widget::image;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

/// A decoded-enough image: the encoded bytes, a renderer handle and the
/// natural size.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    handle: image::Handle,
    bytes: Bytes,
    width: u32,
    height: u32,
}

impl LoadedImage {
    /// Wraps already-validated encoded bytes.
    #[must_use]
    pub fn from_parts(bytes: Bytes, width: u32, height: u32) -> Self {
        Self {
            handle: image::Handle::from_bytes(bytes.clone()),
            bytes,
            width,
            height,
        }
    }

    /// Validates `bytes` as an image and reads its dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the format is unknown or the header is
    /// corrupt.
    pub fn decode(bytes: Bytes) -> Result<Self> {
        let (width, height) = read_dimensions(&bytes)?;
        Ok(Self::from_parts(bytes, width, height))
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    /// Encoded bytes as fetched.
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Reads the natural size from the image header.
///
/// # Errors
///
/// Returns [`Error::Decode`] for unknown formats and zero-sized images, or
/// [`Error::Io`] if the header cannot be read.
pub fn read_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = image_rs::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    if reader.format().is_none() {
        return Err(Error::Decode("unrecognized image format".to_string()));
    }
    let (width, height) = reader.into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(Error::Decode(format!("invalid dimensions {width}x{height}")));
    }
    Ok((width, height))
}

/// Loads gallery images through the allow-list and the shared cache.
///
/// Cloning is cheap; clones are moved into fetch futures.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    fetcher: HttpFetcher,
    allow_list: Arc<AllowList>,
    cache: ImageCache,
    base_dir: Option<PathBuf>,
}

impl ImageLoader {
    #[must_use]
    pub fn new(
        fetcher: HttpFetcher,
        allow_list: AllowList,
        cache: ImageCache,
        base_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            allow_list: Arc::new(allow_list),
            cache,
            base_dir,
        }
    }

    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Directory relative references resolve against.
    pub fn set_base_dir(&mut self, base_dir: Option<PathBuf>) {
        self.base_dir = base_dir;
    }

    /// Returns the image for `reference`, from the cache when present.
    ///
    /// # Errors
    ///
    /// - [`Error::Fetch`] for invalid references, rejected hosts and HTTP
    ///   failures
    /// - [`Error::Io`] when a local file cannot be read
    /// - [`Error::Decode`] when the bytes are not an image
    pub async fn load(&self, reference: String) -> Result<LoadedImage> {
        if let Some(cached) = self.cache.get(&reference) {
            return Ok(cached);
        }

        let bytes = self.fetch_bytes(&reference).await?;
        let loaded = LoadedImage::decode(bytes)?;
        self.cache.insert(reference, loaded.clone());
        Ok(loaded)
    }

    async fn fetch_bytes(&self, reference: &str) -> Result<Bytes> {
        match resolve_reference(reference, self.base_dir.as_deref())? {
            ImageReference::Remote(url) => {
                if let Err(err) = self.allow_list.check(&url) {
                    tracing::warn!(%url, "Remote host not in allow-list");
                    return Err(err.into());
                }
                Ok(self.fetcher.fetch(&url).await?)
            }
            ImageReference::Local(path) => {
                let data = tokio::fs::read(&path).await?;
                Ok(Bytes::from(data))
            }
        }
    }
}
