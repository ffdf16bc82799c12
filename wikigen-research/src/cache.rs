//! In-memory cache of per-query search results.
//!
//! [`CachedBackend`] wraps any [`SearchBackend`] and remembers successful
//! responses keyed by the normalised query string. Uses [`moka`] for
//! async-friendly caching with TTL and automatic eviction. Failed queries are
//! never cached, so a later run retries them naturally.

use std::time::Duration;

use moka::future::Cache;

use crate::backend::SearchBackend;
use crate::error::ResearchError;
use crate::types::RawResult;

/// Maximum number of cached query result sets.
const MAX_CACHE_ENTRIES: u64 = 256;

/// Build the cache key for a query: trimmed and lowercased.
pub fn cache_key(query: &str) -> String {
    query.trim().to_lowercase()
}

/// A [`SearchBackend`] decorator that caches successful results.
pub struct CachedBackend<B> {
    inner: B,
    cache: Option<Cache<String, Vec<RawResult>>>,
}

impl<B: SearchBackend> CachedBackend<B> {
    /// Wrap `inner` with a cache whose entries live for `ttl_seconds`.
    ///
    /// A TTL of 0 disables caching; every call goes to `inner`.
    pub fn new(inner: B, ttl_seconds: u64) -> Self {
        let cache = (ttl_seconds > 0).then(|| {
            Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(ttl_seconds))
                .build()
        });
        Self { inner, cache }
    }

    /// Returns the wrapped backend.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: SearchBackend> SearchBackend for CachedBackend<B> {
    async fn search(&self, query: &str) -> Result<Vec<RawResult>, ResearchError> {
        let Some(cache) = &self.cache else {
            return self.inner.search(query).await;
        };

        let key = cache_key(query);
        if let Some(hit) = cache.get(&key).await {
            tracing::trace!(query, count = hit.len(), "search cache hit");
            return Ok(hit);
        }

        let results = self.inner.search(query).await?;
        cache.insert(key, results.clone()).await;
        Ok(results)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
