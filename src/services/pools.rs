use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use crate::models::{CandidateRecord, JobRecord, ProfileRecord};
use crate::services::{CacheKey, CacheManager, CacheStats, PostgresClient, PostgresError};

/// Record pools served from the cache, loaded from PostgreSQL on a miss
///
/// Cache failures are logged and fall through to the database.
#[derive(Clone)]
pub struct RecordPools {
    postgres: Arc<PostgresClient>,
    cache: Arc<CacheManager>,
}

impl RecordPools {
    pub fn new(postgres: Arc<PostgresClient>, cache: Arc<CacheManager>) -> Self {
        Self { postgres, cache }
    }

    pub async fn candidates(&self) -> Result<Vec<CandidateRecord>, PostgresError> {
        self.cached(CacheKey::candidates(), || self.postgres.fetch_candidates()).await
    }

    pub async fn jobs(&self) -> Result<Vec<JobRecord>, PostgresError> {
        self.cached(CacheKey::jobs(), || self.postgres.fetch_jobs()).await
    }

    pub async fn profiles(&self) -> Result<Vec<ProfileRecord>, PostgresError> {
        self.cached(CacheKey::profiles(), || self.postgres.fetch_profiles()).await
    }

    /// Application state changes often, so it is never cached
    pub async fn applied_profile_ids(&self, job_id: i64) -> Result<HashSet<i64>, PostgresError> {
        self.postgres.applied_profile_ids(job_id).await
    }

    pub async fn applied_job_ids(&self, profile_id: i64) -> Result<HashSet<i64>, PostgresError> {
        self.postgres.applied_job_ids(profile_id).await
    }

    pub async fn health_check(&self) -> bool {
        self.postgres.health_check().await.unwrap_or(false)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    async fn cached<T, F, Fut>(&self, key: String, load: F) -> Result<Vec<T>, PostgresError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, PostgresError>>,
    {
        match self.cache.get::<Vec<T>>(&key).await {
            Ok(records) => return Ok(records),
            Err(crate::services::CacheError::CacheMiss(_)) => {}
            Err(e) => {
                tracing::warn!("Cache read failed for {}, loading from PostgreSQL: {}", key, e);
            }
        }

        let records = load().await?;

        if let Err(e) = self.cache.set(&key, &records).await {
            tracing::warn!("Failed to cache {}: {}", key, e);
        }

        Ok(records)
    }
}
