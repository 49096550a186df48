//! Query result cache.
//!
//! Entries live in the Key-Value store under `query:<key>`, so every
//! component instance opened on the same store shares them.

use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use storefront_locale::{cache_key, Cache};

use crate::DataError;

const DEFAULT_TTL: Duration = Duration::from_secs(60);
const KEY_PREFIX: &str = "query";

#[derive(Serialize, Deserialize)]
struct CachedQuery {
    stored_at_ms: u64,
    value: serde_json::Value,
}

/// Memoizes query results by key for a fixed time-to-live.
///
/// Clones share the same entries.
#[derive(Clone)]
pub struct QueryCache {
    ttl: Duration,
    store: Cache,
}

impl QueryCache {
    /// Cache queries in `store` with the default TTL (60s).
    pub fn new(store: Cache) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    /// Cache queries in `store` with a custom TTL. A zero TTL never serves cached data.
    pub fn with_ttl(store: Cache, ttl: Duration) -> Self {
        Self { ttl, store }
    }

    /// Return the fresh cached value for `key`, or run `fetch` and cache its result.
    ///
    /// Errors are returned to the caller and never cached.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T, DataError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DataError>>,
    {
        let store_key = cache_key!(KEY_PREFIX, key);
        if let Some(value) = self.fresh(&store_key) {
            tracing::trace!(key, "query cache hit");
            return Ok(serde_json::from_value(value)?);
        }

        let value = fetch().await?;
        let entry = CachedQuery {
            stored_at_ms: now_ms(),
            value: serde_json::to_value(&value)?,
        };
        self.store.set(&store_key, &entry)?;
        Ok(value)
    }

    /// Drop every entry whose key starts with `prefix`. Returns how many were dropped.
    pub fn invalidate(&self, prefix: &str) -> Result<usize, DataError> {
        let store_prefix = cache_key!(KEY_PREFIX, prefix);
        let mut dropped = 0;
        for key in self.store.keys()? {
            if key.starts_with(&store_prefix) {
                self.store.delete(&key)?;
                dropped += 1;
            }
        }
        Ok(dropped)
    }

    /// An unreadable entry counts as a miss and is overwritten by the next fetch.
    fn fresh(&self, store_key: &str) -> Option<serde_json::Value> {
        let entry = match self.store.get::<CachedQuery>(store_key) {
            Ok(entry) => entry?,
            Err(e) => {
                tracing::warn!(key = store_key, error = %e, "unreadable query cache entry");
                return None;
            }
        };

        let age = Duration::from_millis(now_ms().saturating_sub(entry.stored_at_ms));
        (age < self.ttl).then_some(entry.value)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
