//! Bounded-concurrency spine color cache
//!
//! Extraction is decoupled from any render pass: callers ask for a color by
//! book id, at most `concurrency` covers are fetched at a time, and each id
//! is cached after its first successful sample. Failed extractions return the
//! fallback without poisoning the cache, so a later request can retry.

use super::extract::{ColorExtractor, FALLBACK_COLOR};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Semaphore;

const DEFAULT_CONCURRENCY: usize = 4;

pub struct SpineColorCache {
    extractor: ColorExtractor,
    permits: Arc<Semaphore>,
    cache: RwLock<HashMap<String, String>>,
}

impl SpineColorCache {
    pub fn new() -> Self {
        Self::with_concurrency(DEFAULT_CONCURRENCY)
    }

    pub fn with_concurrency(limit: usize) -> Self {
        Self {
            extractor: ColorExtractor::new(),
            permits: Arc::new(Semaphore::new(limit.max(1))),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Previously cached color for a book, if any
    pub fn cached(&self, book_id: &str) -> Option<String> {
        self.cache
            .read()
            .ok()
            .and_then(|cache| cache.get(book_id).cloned())
    }

    /// Resolve the spine color for a book cover, extracting on cache miss.
    ///
    /// Total: placeholder and non-HTTP covers are skipped without a fetch,
    /// and extraction failures resolve to the fallback color.
    pub async fn spine_color(&self, book_id: &str, cover_url: &str) -> String {
        if let Some(color) = self.cached(book_id) {
            return color;
        }

        if !is_remote_cover(cover_url) {
            return FALLBACK_COLOR.to_string();
        }

        let Ok(_permit) = self.permits.acquire().await else {
            return FALLBACK_COLOR.to_string();
        };

        // Another task may have filled this id while we waited for a permit
        if let Some(color) = self.cached(book_id) {
            return color;
        }

        match self.extractor.try_extract_color(cover_url).await {
            Ok(color) => {
                if let Ok(mut cache) = self.cache.write() {
                    cache.insert(book_id.to_string(), color.clone());
                }
                color
            }
            Err(e) => {
                tracing::warn!(book_id, url = cover_url, error = %e, "spine color fallback");
                FALLBACK_COLOR.to_string()
            }
        }
    }
}

impl Default for SpineColorCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Covers worth fetching: absolute HTTP(S) URLs only. Local placeholders
/// (`/placeholder.svg` and friends) are never extracted.
fn is_remote_cover(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
