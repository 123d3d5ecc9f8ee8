//! Shared Cache Module
//!
//! Process-wide handle around the cache core for use from async code.
//! Constructed once at startup and passed to whatever needs it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, MemoryCache};

// == Shared Cache ==
/// Cloneable handle to a `MemoryCache` shared across tasks.
///
/// Each bookkeeping operation takes the lock for just that call. There is
/// intentionally no single-flight coordination: two tasks that both miss on
/// the same key before either has stored a result will each run their own
/// lookup, and the later `set` wins.
#[derive(Debug)]
pub struct SharedCache<T> {
    inner: Arc<RwLock<MemoryCache<T>>>,
}

impl<T> Clone for SharedCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> SharedCache<T> {
    // == Constructor ==
    /// Creates a new shared cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryCache::new(default_ttl))),
        }
    }

    // == Get ==
    /// Retrieves a value by key, lazily removing it if expired.
    pub async fn get(&self, key: &str) -> Option<T> {
        // Write lock: a read can delete an expired entry and bumps counters
        self.inner.write().await.get(key)
    }

    // == Set ==
    /// Stores a value, overwriting any prior entry for the key.
    pub async fn set(&self, key: impl Into<String>, value: T, ttl: Option<Duration>) {
        self.inner.write().await.set(key.into(), value, ttl);
    }

    // == Delete ==
    /// Removes the entry for `key`, reporting whether one was present.
    pub async fn delete(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    // == Clear ==
    /// Empties the cache.
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    // == Cleanup ==
    /// Sweeps out expired entries; returns how many were removed.
    pub async fn cleanup(&self) -> usize {
        self.inner.write().await.cleanup()
    }

    // == Stats ==
    /// Returns a snapshot of cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    // == Get Or Set ==
    /// Returns the cached value for `key`, or runs `fetch` and caches its
    /// result.
    ///
    /// The lock is NOT held across `fetch`; only the surrounding get/set
    /// accesses are serialized. A failed fetch is propagated unchanged and
    /// nothing is stored, so the next call retries the lookup.
    pub async fn get_or_set<F, Fut, E>(
        &self,
        key: &str,
        fetch: F,
        ttl: Option<Duration>,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.get(key).await {
            return Ok(cached);
        }

        let value = fetch().await?;
        self.set(key, value.clone(), ttl).await;
        Ok(value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct FetchFailed;

    #[tokio::test]
    async fn test_shared_set_and_get() {
        let cache: SharedCache<String> = SharedCache::new(Duration::from_secs(60));

        cache.set("key1", "value1".to_string(), None).await;

        assert_eq!(cache.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_shared_delete_and_clear() {
        let cache: SharedCache<String> = SharedCache::new(Duration::from_secs(60));

        cache.set("key1", "value1".to_string(), None).await;
        cache.set("key2", "value2".to_string(), None).await;

        assert!(cache.delete("key1").await);
        assert!(!cache.delete("key1").await);

        cache.clear().await;
        assert_eq!(cache.stats().await.size, 0);
    }

    #[tokio::test]
    async fn test_get_or_set_skips_fetch_on_hit() {
        let cache: SharedCache<String> = SharedCache::new(Duration::from_secs(60));
        cache.set("projects", "cached".to_string(), None).await;

        let calls = AtomicUsize::new(0);
        let result: Result<String, FetchFailed> = cache
            .get_or_set(
                "projects",
                || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("fresh".to_string())
                },
                None,
            )
            .await;

        assert_eq!(result, Ok("cached".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_or_set_populates_on_miss() {
        let cache: SharedCache<String> = SharedCache::new(Duration::from_secs(60));

        let calls = AtomicUsize::new(0);
        let result: Result<String, FetchFailed> = cache
            .get_or_set(
                "projects",
                || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("fresh".to_string())
                },
                None,
            )
            .await;

        assert_eq!(result, Ok("fresh".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // Stored for the next caller
        assert_eq!(cache.get("projects").await, Some("fresh".to_string()));
    }

    #[tokio::test]
    async fn test_get_or_set_failure_not_cached() {
        let cache: SharedCache<String> = SharedCache::new(Duration::from_secs(60));

        let result: Result<String, FetchFailed> = cache
            .get_or_set("projects", || async { Err(FetchFailed) }, None)
            .await;

        assert_eq!(result, Err(FetchFailed));
        // Failure left no poisoned entry behind
        assert_eq!(cache.get("projects").await, None);
        assert_eq!(cache.stats().await.size, 0);

        // The next call retries the lookup and succeeds
        let result: Result<String, FetchFailed> = cache
            .get_or_set("projects", || async { Ok("recovered".to_string()) }, None)
            .await;
        assert_eq!(result, Ok("recovered".to_string()));

        // Now cached: even a would-fail fetch is never invoked
        let result: Result<String, FetchFailed> = cache
            .get_or_set(
                "projects",
                || async { panic!("fetch must not run on a warm cache") },
                None,
            )
            .await;
        assert_eq!(result, Ok("recovered".to_string()));
    }

    #[tokio::test]
    async fn test_get_or_set_refetches_after_expiry() {
        let cache: SharedCache<u32> = SharedCache::new(Duration::from_secs(60));

        let calls = AtomicUsize::new(0);
        let fetch = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<u32, FetchFailed>(7)
        };

        cache
            .get_or_set("n", fetch, Some(Duration::from_millis(30)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        cache
            .get_or_set("n", fetch, Some(Duration::from_millis(30)))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_shared_cache_usable_from_blocking_context() {
        let cache: SharedCache<i64> = SharedCache::new(Duration::from_secs(60));

        tokio_test::block_on(async {
            cache.set("answer", 42, None).await;
            assert_eq!(cache.get("answer").await, Some(42));
        });
    }
}
