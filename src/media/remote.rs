// SPDX-License-Identifier: MPL-2.0
//! Remote host allow-list and image reference resolution.
//!
//! Patterns follow the `remotePatterns` convention of web image optimizers:
//!
//! - `protocol`: `"http"` or `"https"`, any when absent
//! - `hostname`: dot-separated labels, `*` matches one label, `**` any number
//! - `port`: `""` matches only the scheme's default port, any when absent
//! - `pathname`: slash-separated segments, `*` matches one segment, `**` any
//!   number; defaults to `/**`
//!
//! Relative paths and `file://` URLs are local and never checked against the
//! allow-list.

use crate::config::defaults::DEFAULT_REMOTE_HOSTNAME;
use crate::error::FetchError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One allowed remote location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
}

impl RemotePattern {
    /// Pattern allowing any HTTPS path on `hostname`.
    #[must_use]
    pub fn https(hostname: impl Into<String>) -> Self {
        Self {
            protocol: Some("https".to_string()),
            hostname: hostname.into(),
            port: Some(String::new()),
            pathname: Some("/**".to_string()),
        }
    }

    /// Returns `true` if `url` is covered by this pattern.
    #[must_use]
    pub fn matches(&self, url: &Url) -> bool {
        if let Some(protocol) = &self.protocol {
            if !protocol.trim_end_matches(':').eq_ignore_ascii_case(url.scheme()) {
                return false;
            }
        }

        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        let hostname = self.hostname.to_ascii_lowercase();
        let host_labels: Vec<&str> = host.split('.').collect();
        let pattern_labels: Vec<&str> = hostname.split('.').collect();
        if !glob_segments(&pattern_labels, &host_labels) {
            return false;
        }

        if let Some(port) = &self.port {
            let port_matches = if port.is_empty() {
                url.port().is_none()
            } else {
                port.parse::<u16>().ok() == url.port()
            };
            if !port_matches {
                return false;
            }
        }

        let pathname = self.pathname.as_deref().unwrap_or("/**");
        let pattern_segments: Vec<&str> = pathname.split('/').collect();
        let path_segments: Vec<&str> = url.path().split('/').collect();
        glob_segments(&pattern_segments, &path_segments)
    }
}

impl Default for RemotePattern {
    fn default() -> Self {
        Self::https(DEFAULT_REMOTE_HOSTNAME)
    }
}

/// Matches `input` against `pattern`, where `*` stands for one segment and
/// `**` for any number of segments.
fn glob_segments(pattern: &[&str], input: &[&str]) -> bool {
    match pattern.split_first() {
        None => input.is_empty(),
        Some((&"**", rest)) => (0..=input.len()).any(|skip| glob_segments(rest, &input[skip..])),
        Some((&head, rest)) => match input.split_first() {
            Some((&segment, remaining)) => {
                (head == "*" || head == segment) && glob_segments(rest, remaining)
            }
            None => false,
        },
    }
}

/// Set of allowed remote patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    patterns: Vec<RemotePattern>,
}

impl AllowList {
    #[must_use]
    pub fn new(patterns: Vec<RemotePattern>) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub fn patterns(&self) -> &[RemotePattern] {
        &self.patterns
    }

    /// Accepts `url` if any pattern covers it.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::HostNotAllowed`] with the URL's host otherwise.
    pub fn check(&self, url: &Url) -> Result<(), FetchError> {
        if self.patterns.iter().any(|pattern| pattern.matches(url)) {
            Ok(())
        } else {
            Err(FetchError::HostNotAllowed(
                url.host_str().unwrap_or_default().to_string(),
            ))
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(vec![RemotePattern::default()])
    }
}

/// Where the bytes of an image reference come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    Remote(Url),
    Local(PathBuf),
}

/// Interprets `reference` as a remote URL, a `file://` URL or a path
/// relative to `base_dir`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidReference`] for empty references and
/// unsupported URL schemes.
pub fn resolve_reference(
    reference: &str,
    base_dir: Option<&Path>,
) -> Result<ImageReference, FetchError> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidReference(reference.to_string()));
    }

    // Single-letter schemes are Windows drive letters.
    match Url::parse(trimmed).ok().filter(|url| url.scheme().len() > 1) {
        Some(url) => match url.scheme() {
            "http" | "https" => Ok(ImageReference::Remote(url)),
            "file" => url
                .to_file_path()
                .map(ImageReference::Local)
                .map_err(|()| FetchError::InvalidReference(reference.to_string())),
            _ => Err(FetchError::InvalidReference(reference.to_string())),
        },
        None => {
            let path = Path::new(trimmed);
            let resolved = match base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.to_path_buf(),
            };
            Ok(ImageReference::Local(resolved))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid url")
    }

    #[test]
    fn default_pattern_allows_brave_photos_https() {
        let list = AllowList::default();
        assert!(list.check(&url("https://brave.photos/a/b/c.jpg")).is_ok());
        assert!(list.check(&url("https://brave.photos/")).is_ok());
    }

    #[test]
    fn default_pattern_rejects_other_hosts_and_schemes() {
        let list = AllowList::default();
        assert_eq!(
            list.check(&url("https://evil.example/a.jpg")),
            Err(FetchError::HostNotAllowed("evil.example".into()))
        );
        assert!(list.check(&url("http://brave.photos/a.jpg")).is_err());
        assert!(list.check(&url("https://brave.photos:8443/a.jpg")).is_err());
    }

    #[test]
    fn single_star_matches_one_label() {
        let pattern = RemotePattern {
            protocol: None,
            hostname: "*.example.com".into(),
            port: None,
            pathname: None,
        };
        assert!(pattern.matches(&url("https://cdn.example.com/x.png")));
        assert!(!pattern.matches(&url("https://a.b.example.com/x.png")));
        assert!(!pattern.matches(&url("https://example.com/x.png")));
    }

    #[test]
    fn double_star_matches_any_labels() {
        let pattern = RemotePattern {
            protocol: None,
            hostname: "**.example.com".into(),
            port: None,
            pathname: None,
        };
        assert!(pattern.matches(&url("http://a.b.example.com/x.png")));
        assert!(pattern.matches(&url("http://example.com/x.png")));
    }

    #[test]
    fn pathname_restricts_paths() {
        let pattern = RemotePattern {
            protocol: Some("https".into()),
            hostname: "img.example.com".into(),
            port: None,
            pathname: Some("/galleries/*/**".into()),
        };
        assert!(pattern.matches(&url("https://img.example.com/galleries/beach/1.jpg")));
        assert!(!pattern.matches(&url("https://img.example.com/private/1.jpg")));
    }

    #[test]
    fn explicit_port_must_match() {
        let pattern = RemotePattern {
            protocol: None,
            hostname: "localhost".into(),
            port: Some("8080".into()),
            pathname: None,
        };
        assert!(pattern.matches(&url("http://localhost:8080/a.jpg")));
        assert!(!pattern.matches(&url("http://localhost:9090/a.jpg")));
    }

    #[test]
    fn resolve_remote_and_relative_references() {
        let base = Path::new("/data/galleries");
        assert_eq!(
            resolve_reference("https://brave.photos/a.jpg", Some(base)),
            Ok(ImageReference::Remote(url("https://brave.photos/a.jpg")))
        );
        assert_eq!(
            resolve_reference("img/a.jpg", Some(base)),
            Ok(ImageReference::Local(PathBuf::from("/data/galleries/img/a.jpg")))
        );
    }

    #[test]
    fn resolve_rejects_unsupported_schemes_and_empty() {
        assert!(matches!(
            resolve_reference("ftp://host/a.jpg", None),
            Err(FetchError::InvalidReference(_))
        ));
        assert!(matches!(
            resolve_reference("   ", None),
            Err(FetchError::InvalidReference(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_file_url_to_path() {
        assert_eq!(
            resolve_reference("file:///tmp/a.jpg", None),
            Ok(ImageReference::Local(PathBuf::from("/tmp/a.jpg")))
        );
    }
}
