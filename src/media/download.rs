// SPDX-License-Identifier: MPL-2.0
//! Saving the lightbox image to disk.

use super::loader::ImageLoader;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File name used for the image at zero-based `index`.
#[must_use]
pub fn download_file_name(index: usize) -> String {
    format!("image-{}.jpg", index + 1)
}

/// Writes the bytes of `reference` to `dir/image-{index+1}.jpg`.
///
/// Bytes come from the shared cache when the image is already loaded. The
/// directory is created if missing and an existing file is overwritten.
///
/// # Errors
///
/// Propagates load failures and returns [`Error::Io`] if the file cannot be
/// written.
pub async fn save_image(
    loader: &ImageLoader,
    reference: String,
    index: usize,
    dir: &Path,
) -> Result<PathBuf> {
    let image = loader.load(reference).await?;

    tokio::fs::create_dir_all(dir).await?;
    let target = dir.join(download_file_name(index));
    tokio::fs::write(&target, image.bytes()).await?;

    Ok(target)
}

/// Same as [`save_image`] but resolves the target directory itself.
///
/// # Errors
///
/// Returns [`Error::Io`] when no download directory can be determined.
pub async fn save_to_downloads(
    loader: ImageLoader,
    reference: String,
    index: usize,
    dir: Option<PathBuf>,
) -> Result<PathBuf> {
    let dir = dir.ok_or_else(|| Error::Io("no download directory available".to_string()))?;
    save_image(&loader, reference, index, &dir).await
}
