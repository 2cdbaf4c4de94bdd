use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// Two-tier cache for loaded record pools
///
/// L1 is an in-process moka cache. L2 is Redis, shared across instances, and
/// optional: without it the manager runs on L1 alone.
pub struct CacheManager {
    redis: Option<Arc<tokio::sync::Mutex<ConnectionManager>>>,
    l1_cache: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a cache manager backed by Redis
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        Ok(Self {
            redis: Some(Arc::new(tokio::sync::Mutex::new(redis))),
            l1_cache: build_l1(l1_size, ttl_secs),
            ttl_secs,
        })
    }

    /// Create an in-process cache manager without Redis
    pub fn in_memory(l1_size: u64, ttl_secs: u64) -> Self {
        Self {
            redis: None,
            l1_cache: build_l1(l1_size, ttl_secs),
            ttl_secs,
        }
    }

    /// Get a value from cache (L1 first, then L2)
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.l1_cache.get(key).await {
            tracing::trace!("L1 cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        if let Some(redis) = &self.redis {
            let mut conn = redis.lock().await;
            let value: Option<String> = redis::cmd("GET")
                .arg(key)
                .query_async(&mut *conn)
                .await?;
            drop(conn);

            if let Some(json) = value {
                tracing::trace!("L2 cache hit: {}", key);

                // Populate L1 cache
                self.l1_cache.insert(key.to_string(), json.as_bytes().to_vec()).await;

                return Ok(serde_json::from_str(&json)?);
            }
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in every configured tier
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;

        self.l1_cache.insert(key.to_string(), json.as_bytes().to_vec()).await;

        if let Some(redis) = &self.redis {
            let mut conn = redis.lock().await;
            redis::cmd("SETEX")
                .arg(key)
                .arg(self.ttl_secs)
                .arg(json)
                .query_async::<()>(&mut *conn)
                .await?;
        }

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    pub fn has_redis(&self) -> bool {
        self.redis.is_some()
    }

    /// Tier state reported by the health endpoint
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            l1_size: self.l1_cache.entry_count(),
            l2_enabled: self.has_redis(),
            ttl_secs: self.ttl_secs,
        }
    }
}

fn build_l1(l1_size: u64, ttl_secs: u64) -> moka::future::Cache<String, Vec<u8>> {
    moka::future::CacheBuilder::new(l1_size)
        .time_to_live(Duration::from_secs(ttl_secs))
        .build()
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Pools currently held in process
    pub l1_size: u64,
    pub l2_enabled: bool,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for the candidate pool
    pub fn candidates() -> String {
        "pool:candidates".to_string()
    }

    /// Build a cache key for the job pool
    pub fn jobs() -> String {
        "pool:jobs".to_string()
    }

    /// Build a cache key for the profile pool
    pub fn profiles() -> String {
        "pool:profiles".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_cache_set_get_redis() {
        let cache = CacheManager::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create cache");

        let key = "test_key";
        let value = "test_value";

        cache.set(key, &value).await.unwrap();
        let result: String = cache.get(key).await.unwrap();
        assert_eq!(result, value);
        assert!(cache.stats().l2_enabled);
    }

    #[tokio::test]
    async fn test_in_memory_set_get() {
        let cache = CacheManager::in_memory(100, 60);
        assert!(!cache.has_redis());

        let pool = vec![1_i64, 2, 3];
        cache.set(&CacheKey::candidates(), &pool).await.unwrap();
        let cached: Vec<i64> = cache.get(&CacheKey::candidates()).await.unwrap();
        assert_eq!(cached, pool);

        assert!(matches!(
            cache.get::<Vec<i64>>(&CacheKey::jobs()).await,
            Err(CacheError::CacheMiss(_))
        ));
    }

    #[tokio::test]
    async fn test_stats_report_tiers_and_entries() {
        let cache = CacheManager::in_memory(100, 30);
        cache.set(&CacheKey::jobs(), &vec![7_i64]).await.unwrap();
        cache.l1_cache.run_pending_tasks().await;

        let stats = cache.stats();
        assert_eq!(stats.l1_size, 1);
        assert!(!stats.l2_enabled);
        assert_eq!(stats.ttl_secs, 30);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["l2Enabled"], false);
        assert_eq!(json["ttlSecs"], 30);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::candidates(), "pool:candidates");
        assert_eq!(CacheKey::jobs(), "pool:jobs");
        assert_eq!(CacheKey::profiles(), "pool:profiles");
    }
}
