// SPDX-License-Identifier: MPL-2.0
//! HTTP transport for remote images.

use crate::error::FetchError;
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use reqwest::Url;
use std::time::Duration;

/// Upper bound on a single image body.
pub const MAX_IMAGE_BYTES: usize = 64 * 1024 * 1024;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds the client with a bounded redirect policy and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the TLS backend fails to
    /// initialize.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Downloads the full body at `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`] on a non-success HTTP status
    /// - [`FetchError::Network`] on transport failures or oversized bodies
    pub async fn fetch(&self, url: &Url) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let capacity = response
            .content_length()
            .map_or(0, |len| (len as usize).min(MAX_IMAGE_BYTES));
        let mut body = BytesMut::with_capacity(capacity);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Network(e.to_string()))?;
            if body.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(FetchError::Network(format!(
                    "response exceeds {MAX_IMAGE_BYTES} bytes"
                )));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_the_app() {
        assert!(USER_AGENT.starts_with("IcedGallery/"));
    }

    #[test]
    fn fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
    }
}
