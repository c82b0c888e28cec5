// SPDX-License-Identifier: MPL-2.0
use crate::application::port::SourceError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Source(String),
    Fetch(FetchError),
    Decode(String),
}

/// Specific failures while fetching an image reference.
/// Used to provide user-friendly, localized messages in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The remote host is not part of the configured allow-list.
    HostNotAllowed(String),

    /// The reference could not be parsed as a URL or path.
    InvalidReference(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// Transport-level failure (DNS, TLS, connection reset...).
    Network(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::HostNotAllowed(_) => "error-fetch-host-not-allowed",
            FetchError::InvalidReference(_) => "error-fetch-invalid-reference",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::Network(_) => "error-fetch-network",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::HostNotAllowed(host) => write!(f, "Host not allowed: {}", host),
            FetchError::InvalidReference(reference) => {
                write!(f, "Invalid image reference: {}", reference)
            }
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Source(e) => write!(f, "Source Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Returns the i18n key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Fetch(e) => e.i18n_key(),
            Error::Decode(_) => "error-decode",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Source(_) => "error-source",
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Source(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
