//! URL-keyed query cache with time-based expiry and in-flight deduplication.
//!
//! Entries move through three ages:
//! - younger than `stale_after`: served as-is;
//! - younger than `evict_after`: served immediately while one background
//!   refresh runs;
//! - older: treated as a miss and removed by the sweeper.
//!
//! Concurrent requests for the same key share a single fetch. A finished fetch
//! only replaces an entry written by a fetch that was issued before it.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use serde_json::Value as JsonValue;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::FetchError;

/// Outcome of a fetch as shared between waiters.
pub type FetchResult = Result<Arc<JsonValue>, FetchError>;

type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

/// Expiry policy of a [`QueryCache`].
#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    /// Age after which an entry is refreshed in the background.
    pub stale_after: Duration,
    /// Age after which an entry is no longer served.
    pub evict_after: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(300),
            evict_after: Duration::from_secs(900),
        }
    }
}

/// Cached response body.
struct CacheEntry {
    value: Arc<JsonValue>,
    fetched_at: Instant,
    /// Issue sequence of the fetch that produced this entry.
    seq: u64,
}

/// Value returned by [`QueryCache::get_or_fetch`].
#[derive(Debug, Clone)]
pub struct CacheLookup {
    pub value: Arc<JsonValue>,
    /// True when `value` is stale and a refresh is running.
    pub refreshing: bool,
}

struct Inner {
    settings: CacheSettings,
    entries: RwLock<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, (u64, SharedFetch)>>,
    next_seq: AtomicU64,
}

/// Shared query cache. Cloning is cheap and every clone sees the same entries.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

impl QueryCache {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                settings,
                entries: RwLock::new(HashMap::new()),
                in_flight: Mutex::new(HashMap::new()),
                next_seq: AtomicU64::new(0),
            }),
        }
    }

    pub fn settings(&self) -> CacheSettings {
        self.inner.settings
    }

    /// Return the cached value for `key`, fetching it with `fetch` when needed.
    ///
    /// `fetch` is only invoked if no usable entry exists and no identical
    /// request is already in flight.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<CacheLookup, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<JsonValue, FetchError>> + Send + 'static,
    {
        let cached = {
            let entries = self.inner.entries.read().await;
            entries
                .get(key)
                .map(|entry| (entry.value.clone(), entry.fetched_at.elapsed()))
        };

        if let Some((value, age)) = cached {
            if age < self.inner.settings.stale_after {
                debug!(key = %key, age_ms = %age.as_millis(), "Query cache hit");
                return Ok(CacheLookup {
                    value,
                    refreshing: false,
                });
            }

            if age < self.inner.settings.evict_after {
                debug!(key = %key, age_ms = %age.as_millis(), "Query cache stale, refreshing");
                let refresh = self.start_fetch(key, fetch);
                tokio::spawn(refresh);
                return Ok(CacheLookup {
                    value,
                    refreshing: true,
                });
            }
        }

        let value = self.start_fetch(key, fetch).await?;
        Ok(CacheLookup {
            value,
            refreshing: false,
        })
    }

    /// Join the in-flight fetch for `key`, or start a new one.
    fn start_fetch<F, Fut>(&self, key: &str, fetch: F) -> SharedFetch
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<JsonValue, FetchError>> + Send + 'static,
    {
        let mut in_flight = self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some((_, shared)) = in_flight.get(key) {
            debug!(key = %key, "Joining in-flight query");
            return shared.clone();
        }

        let seq = self.inner.next_seq.fetch_add(1, Ordering::Relaxed);
        let cache = self.clone();
        let owned_key = key.to_string();
        let request = fetch();

        let shared = async move {
            let result = request.await.map(Arc::new);
            match &result {
                Ok(value) => cache.store(&owned_key, seq, value.clone()).await,
                Err(e) => warn!(key = %owned_key, error = %e, "Query fetch failed"),
            }
            cache.finish(&owned_key, seq);
            result
        }
        .boxed()
        .shared();

        in_flight.insert(key.to_string(), (seq, shared.clone()));
        shared
    }

    async fn store(&self, key: &str, seq: u64, value: Arc<JsonValue>) {
        let mut entries = self.inner.entries.write().await;
        if let Some(existing) = entries.get(key)
            && existing.seq > seq
        {
            info!(
                key = %key,
                seq,
                newer_seq = existing.seq,
                "Discarding response superseded by a later request"
            );
            return;
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                fetched_at: Instant::now(),
                seq,
            },
        );
    }

    fn finish(&self, key: &str, seq: u64) {
        let mut in_flight = self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if in_flight.get(key).is_some_and(|(s, _)| *s == seq) {
            in_flight.remove(key);
        }
    }

    /// Drop entries older than `evict_after`. Returns the number removed.
    pub async fn evict_expired(&self) -> usize {
        let evict_after = self.inner.settings.evict_after;
        let mut entries = self.inner.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.fetched_at.elapsed() < evict_after);
        before - entries.len()
    }

    /// Number of cached entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.inner.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
