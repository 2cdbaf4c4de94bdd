use serde::{Deserialize, Serialize};
use crate::models::domain::{JobRecord, ProfileRecord, Recommendation, ScoredCandidate};
use crate::services::CacheStats;

/// Response for the candidate search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidatesResponse {
    pub count: usize,
    #[serde(rename = "numPages")]
    pub num_pages: usize,
    pub page: usize,
    pub results: Vec<ScoredCandidate>,
}

/// Response for the job listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRecord>,
    pub count: usize,
}

/// Candidates recommended for a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedCandidatesResponse {
    #[serde(rename = "jobId")]
    pub job_id: i64,
    pub candidates: Vec<Recommendation<ProfileRecord>>,
}

/// Jobs recommended for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedJobsResponse {
    #[serde(rename = "profileId")]
    pub profile_id: i64,
    pub jobs: Vec<Recommendation<JobRecord>>,
}

/// Skill match between one job and one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchResponse {
    #[serde(rename = "jobId")]
    pub job_id: i64,
    #[serde(rename = "profileId")]
    pub profile_id: i64,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_reports_cache_tiers() {
        let health = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            cache: CacheStats {
                l1_size: 2,
                l2_enabled: false,
                ttl_secs: 30,
            },
        };

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["cache"]["l1Size"], 2);
        assert_eq!(json["cache"]["l2Enabled"], false);
        assert_eq!(json["cache"]["ttlSecs"], 30);
    }
}
