// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    proficiency_level, CandidateRecord, JobRecord, LocationRecord, ProfileRecord, ProjectRecord,
    RadiusFilter, Recommendation, ScoredCandidate, SearchSpec, SkillRecord, MAX_SKILL_LEVEL,
};
pub use requests::{JobListQuery, SearchCandidatesRequest, SearchLocation};
pub use responses::{
    ErrorResponse, HealthResponse, JobListResponse, RecommendedCandidatesResponse,
    RecommendedJobsResponse, SearchCandidatesResponse, SkillMatchResponse,
};
