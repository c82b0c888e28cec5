// SPDX-License-Identifier: MPL-2.0
//! Shared in-memory cache of loaded images.
//!
//! Keyed by the image reference string as it appears in the gallery data.
//! Cards, the lightbox, thumbnails and downloads all read through the same
//! cache, so an image is fetched at most once while it stays resident.

use super::loader::LoadedImage;
use crate::config::defaults::{DEFAULT_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES, MIN_CACHE_MAX_IMAGES};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

struct Inner {
    entries: LruCache<String, LoadedImage>,
    stats: CacheStats,
}

/// LRU cache shared between the UI thread and fetch futures.
///
/// Cloning yields another handle to the same cache.
#[derive(Clone)]
pub struct ImageCache {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}

impl ImageCache {
    /// Creates a cache holding at most `max_images` entries, clamped to the
    /// supported range.
    #[must_use]
    pub fn new(max_images: usize) -> Self {
        let clamped = max_images.clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES);
        let capacity = NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: LruCache::new(capacity),
                stats: CacheStats::default(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Looks up `reference`, refreshing its LRU position.
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<LoadedImage> {
        let mut inner = self.lock();
        let found = inner.entries.get(reference).cloned();
        if found.is_some() {
            inner.stats.hits += 1;
        } else {
            inner.stats.misses += 1;
        }
        found
    }

    /// Looks up `reference` without touching LRU order or statistics.
    #[must_use]
    pub fn peek(&self, reference: &str) -> Option<LoadedImage> {
        self.lock().entries.peek(reference).cloned()
    }

    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.lock().entries.contains(reference)
    }

    pub fn insert(&self, reference: impl Into<String>, image: LoadedImage) {
        let mut inner = self.lock();
        inner.entries.put(reference.into(), image);
        inner.stats.insertions += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().entries.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_MAX_IMAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn image(tag: u8) -> LoadedImage {
        LoadedImage::from_parts(Bytes::from(vec![tag; 4]), 2, 2)
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(ImageCache::new(0).capacity(), MIN_CACHE_MAX_IMAGES);
        assert_eq!(ImageCache::new(1_000_000).capacity(), MAX_CACHE_MAX_IMAGES);
    }

    #[test]
    fn get_after_insert_hits() {
        let cache = ImageCache::default();
        cache.insert("a", image(1));

        let found = cache.get("a").expect("cached");
        assert_eq!(found.width(), 2);
        assert!(cache.get("b").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate(), 50.0);
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let cache = ImageCache::new(MIN_CACHE_MAX_IMAGES);
        for i in 0..MIN_CACHE_MAX_IMAGES {
            cache.insert(format!("img-{i}"), image(0));
        }
        // Touch the oldest entry so the second oldest becomes the victim.
        let _ = cache.get("img-0");
        cache.insert("fresh", image(9));

        assert_eq!(cache.len(), MIN_CACHE_MAX_IMAGES);
        assert!(cache.contains("img-0"));
        assert!(!cache.contains("img-1"));
        assert!(cache.contains("fresh"));
    }

    #[test]
    fn clones_share_entries() {
        let cache = ImageCache::default();
        let other = cache.clone();
        other.insert("shared", image(3));
        assert!(cache.peek("shared").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn peek_leaves_order_and_stats_alone() {
        let cache = ImageCache::new(MIN_CACHE_MAX_IMAGES);
        for i in 0..MIN_CACHE_MAX_IMAGES {
            cache.insert(format!("img-{i}"), image(0));
        }
        assert!(cache.peek("img-0").is_some());
        cache.insert("fresh", image(9));

        assert!(!cache.contains("img-0"));
        assert_eq!(cache.stats().hits + cache.stats().misses, 0);
    }
}
