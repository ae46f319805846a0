use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-process cache for ranking responses
///
/// Scoring is deterministic (same inputs always produce the same output), so
/// a ranked response can be reused verbatim while the client keeps paging the
/// same pool. Entries expire on a TTL to bound staleness against profile
/// edits made elsewhere in the app.
pub struct CacheManager {
    entries: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a cache holding up to `capacity` serialized responses
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries, ttl_secs }
    }

    /// Get a cached value, deserializing into the caller's type
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.entries.get(key).await {
            tracing::trace!("cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::trace!("cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Store a value under the given key
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.entries.insert(key.to_string(), bytes).await;
        tracing::trace!("cache set: {} (ttl {}s)", key, self.ttl_secs);
        Ok(())
    }

    /// Drop one entry
    pub async fn delete(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    /// Current entry count
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache key builder
///
/// Pool keys embed a fingerprint of the candidate ids so a changed pool never
/// reuses a stale ranking.
pub struct CacheKey;

impl CacheKey {
    /// Key for a single influencer/gig score
    pub fn score(influencer_id: &str, gig_id: &str) -> String {
        format!("score:{}:{}", influencer_id, gig_id)
    }

    /// Key for an influencer ranking against one gig
    pub fn gig_matches(gig_id: &str, pool_fingerprint: u64, limit: usize) -> String {
        format!("gig:{}:{:x}:{}", gig_id, pool_fingerprint, limit)
    }

    /// Key for a gig ranking for one influencer
    pub fn influencer_gigs(influencer_id: &str, pool_fingerprint: u64, limit: usize) -> String {
        format!("inf:{}:{:x}:{}", influencer_id, pool_fingerprint, limit)
    }

    /// Key for a sponsor-side influencer ranking
    pub fn sponsor_matches(
        sponsor_id: &str,
        pool_fingerprint: u64,
        budget: f64,
        limit: usize,
    ) -> String {
        format!(
            "sponsor:{}:{:x}:{}:{}",
            sponsor_id, pool_fingerprint, budget, limit
        )
    }

    /// Order-insensitive fingerprint of a candidate-id pool
    pub fn pool_fingerprint<'a, I>(ids: I) -> u64
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sorted: Vec<&str> = ids.into_iter().collect();
        sorted.sort_unstable();
        let mut hasher = DefaultHasher::new();
        sorted.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_set_get_delete() {
        let cache = CacheManager::new(100, 60);
        let key = "test_key";

        cache.set(key, &"test_value".to_string()).await.unwrap();
        let value: String = cache.get(key).await.unwrap();
        assert_eq!(value, "test_value");

        cache.delete(key).await;
        assert!(cache.get::<String>(key).await.is_err());
    }

    #[test]
    fn test_pool_fingerprint_is_order_insensitive() {
        let a = CacheKey::pool_fingerprint(["inf_1", "inf_2", "inf_3"]);
        let b = CacheKey::pool_fingerprint(["inf_3", "inf_1", "inf_2"]);
        assert_eq!(a, b);

        let c = CacheKey::pool_fingerprint(["inf_1", "inf_2"]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::score("i1", "g1"), "score:i1:g1");
        assert_eq!(CacheKey::gig_matches("g1", 0xff, 10), "gig:g1:ff:10");
        assert_eq!(CacheKey::influencer_gigs("i1", 0xff, 10), "inf:i1:ff:10");
        assert_eq!(
            CacheKey::sponsor_matches("s1", 0xff, 10000.0, 20),
            "sponsor:s1:ff:10000:20"
        );
    }
}
