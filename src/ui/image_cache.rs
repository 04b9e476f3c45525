// SPDX-License-Identifier: MPL-2.0
//! Preview cache for remote campaign images.
//!
//! Both the gallery and the brief results show image cards. The bytes of
//! each asset are fetched once and kept as an Iced image handle keyed by
//! URL, so switching screens does not hit the backend again.
//!
//! # Design
//!
//! - **LRU eviction**: least recently inserted previews go first
//! - **Count-bounded**: capacity comes from `[gallery] image_cache_capacity`
//!   and grows to hold every preview currently on screen
//! - **In-flight tracking**: a URL is requested at most once at a time
//! - **Failures are cached**: a broken link shows a placeholder instead of
//!   being retried on every render

use crate::api::ApiError;
use crate::app::config::DEFAULT_IMAGE_CACHE_CAPACITY;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
enum Entry {
    Ready(Handle),
    Failed,
}

/// What a card should display for a given URL.
#[derive(Debug, Clone)]
pub enum Preview {
    Ready(Handle),
    Loading,
    Unavailable,
}

#[derive(Debug)]
pub struct ImageCache {
    cache: LruCache<String, Entry>,
    pending: HashSet<String>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_CAPACITY)
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` previews (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
        }
    }

    /// Grows the capacity so `shown` previews fit at once. Never shrinks.
    pub fn reserve(&mut self, shown: usize) {
        if let Some(wanted) = NonZeroUsize::new(shown) {
            if wanted > self.cache.cap() {
                tracing::debug!(from = self.cache.cap().get(), to = shown, "growing preview cache");
                self.cache.resize(wanted);
            }
        }
    }

    /// Returns the URLs that still need fetching and marks them in flight.
    ///
    /// Already cached, already pending and duplicate URLs are skipped.
    pub fn claim_missing<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed = Vec::new();
        for url in urls {
            if self.cache.contains(url) || self.pending.contains(url) {
                continue;
            }
            self.pending.insert(url.to_string());
            claimed.push(url.to_string());
        }
        claimed
    }

    /// Stores the outcome of a preview fetch.
    ///
    /// Returns the URL pushed out to make room, if any.
    pub fn insert(&mut self, url: String, result: Result<Vec<u8>, ApiError>) -> Option<String> {
        self.pending.remove(&url);

        let entry = match result {
            Ok(bytes) => Entry::Ready(Handle::from_bytes(bytes)),
            Err(_) => Entry::Failed,
        };

        match self.cache.push(url.clone(), entry) {
            Some((evicted, _)) if evicted != url => Some(evicted),
            _ => None,
        }
    }

    /// Looks up a preview without touching the LRU order.
    #[must_use]
    pub fn preview(&self, url: &str) -> Preview {
        match self.cache.peek(url) {
            Some(Entry::Ready(handle)) => Preview::Ready(handle.clone()),
            Some(Entry::Failed) => Preview::Unavailable,
            None => Preview::Loading,
        }
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}
