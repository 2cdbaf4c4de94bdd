//! Talent Match - candidate search, scoring and job recommendation
//!
//! The `core` module is a pure, synchronous matching library: a haversine
//! radius filter, a weighted candidate scorer and a skill-overlap recommender.
//! The remaining modules wrap it in an HTTP service reading from the
//! recruiting application's database.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_skill_match_score, filter_candidates, haversine_distance, score_candidate,
    CandidateSearch, CoreError, Recommender,
};
pub use crate::models::{CandidateRecord, JobRecord, ProfileRecord, SearchSpec, SkillRecord};
