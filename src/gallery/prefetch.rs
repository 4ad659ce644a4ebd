// SPDX-License-Identifier: MPL-2.0
//! Prefetch of the entries adjacent to the open preview.
//!
//! Opening an entry hints its previewable neighbors; image neighbors are
//! decoded in the background into a byte-bounded LRU cache so the following
//! navigation step hits memory instead of the decoder. Video neighbors are
//! hinted but never decoded.

use crate::error::Result;
use crate::media::{ImageData, MediaKind};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default prefetch cache size in bytes (32 MB).
pub const DEFAULT_PREFETCH_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Default maximum number of images to cache.
pub const DEFAULT_MAX_IMAGES: usize = 8;

/// A previewable neighbor of the open preview, advertised for warming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchHint {
    pub path: PathBuf,
    pub kind: MediaKind,
}

/// Collects the prefetch hints for the open preview: its previewable
/// neighbor in each direction, with path and kind.
#[must_use]
pub fn hints(navigator: &crate::gallery::GalleryNavigator) -> Vec<PrefetchHint> {
    let neighbors = navigator.neighbors();
    [neighbors.previous, neighbors.next]
        .into_iter()
        .flatten()
        .filter_map(|index| navigator.get(index))
        .filter_map(|entry| {
            entry.kind.map(|kind| PrefetchHint {
                path: entry.path.clone(),
                kind,
            })
        })
        .collect()
}

/// LRU cache for prefetched neighbor images.
///
/// Memory-bounded: inserting evicts least recently used entries until the
/// new image fits, and images larger than half the byte budget are not
/// cached at all.
pub struct ImagePrefetchCache {
    cache: LruCache<PathBuf, ImageData>,
    max_bytes: usize,
    current_bytes: usize,
}

impl ImagePrefetchCache {
    /// Creates a cache bounded by `max_bytes` and `max_images`.
    ///
    /// # Panics
    ///
    /// Panics if `max_images` is zero.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        let capacity = NonZeroUsize::new(max_images).expect("cache capacity must be non-zero");
        Self {
            cache: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
        }
    }

    /// Creates a cache with the default bounds.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_PREFETCH_CACHE_BYTES, DEFAULT_MAX_IMAGES)
    }

    /// Inserts a decoded image, evicting as needed.
    ///
    /// Returns `false` when the image is too large to ever fit.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        let image_size = image.size_bytes();
        if image_size > self.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + image_size > self.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            }
        }

        if let Some((_, evicted)) = self.cache.push(path, image) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
        }
        self.current_bytes += image_size;
        true
    }

    /// Takes an image out of the cache, if present.
    ///
    /// The image is removed; re-opening the entry later prefetches it again.
    pub fn take(&mut self, path: &Path) -> Option<ImageData> {
        let image = self.cache.pop(path)?;
        self.current_bytes = self.current_bytes.saturating_sub(image.size_bytes());
        Some(image)
    }

    /// Checks for a cached image without touching LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    /// Number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for ImagePrefetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePrefetchCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}

/// Loads an image for prefetching on the blocking pool.
///
/// Returns the path together with the result so the caller can key the
/// cache insert.
pub async fn load_for_prefetch(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let path_clone = path.clone();
    let result = tokio::task::spawn_blocking(move || crate::media::load_image(&path_clone))
        .await
        .unwrap_or_else(|e| Err(crate::error::Error::Io(format!("Prefetch task failed: {e}"))));

    (path, result)
}
