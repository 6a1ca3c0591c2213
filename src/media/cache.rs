// SPDX-License-Identifier: MPL-2.0
//! LRU cache of fetched images keyed by source.
//!
//! Revisiting a chart reuses the decoded image, so the viewer refits from the
//! same natural height without another round trip.

use super::LoadedImage;
use lru::LruCache;
use std::num::NonZeroUsize;

pub struct ImageCache {
    cache: LruCache<String, LoadedImage>,
    hits: u64,
    misses: u64,
}

impl ImageCache {
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached image and marks it as recently used.
    pub fn get(&mut self, source: &str) -> Option<LoadedImage> {
        match self.cache.get(source) {
            Some(image) => {
                self.hits += 1;
                Some(image.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, source: String, image: LoadedImage) {
        if let Some((evicted, _)) = self.cache.push(source, image) {
            log::trace!("image cache evicted {evicted}");
        }
    }

    /// Checks presence without touching the LRU order.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.cache.contains(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Fraction of lookups served from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::decode;
    use crate::test_utils::png_bytes;

    fn image(height: u32) -> LoadedImage {
        decode(png_bytes(4, height)).expect("test png should decode")
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = ImageCache::new(4);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.hit_rate(), 0.0);
    }

    #[test]
    fn insert_and_get() {
        let mut cache = ImageCache::new(4);
        cache.insert("a.png".into(), image(600));

        let hit = cache.get("a.png").expect("image should be cached");
        assert_eq!(hit.height, 600);
        assert!(cache.get("b.png").is_none());
        assert_eq!(cache.hit_rate(), 0.5);
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.insert("a.png".into(), image(1));
        cache.insert("b.png".into(), image(2));
        let _ = cache.get("a.png");
        cache.insert("c.png".into(), image(3));

        assert!(cache.contains("a.png"));
        assert!(!cache.contains("b.png"));
        assert!(cache.contains("c.png"));
    }

    #[test]
    fn zero_capacity_holds_one_image() {
        let mut cache = ImageCache::new(0);
        cache.insert("a.png".into(), image(1));
        cache.insert("b.png".into(), image(2));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("b.png"));
    }
}
