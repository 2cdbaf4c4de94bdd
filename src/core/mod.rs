// Core algorithm exports
pub mod distance;
pub mod error;
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod search;
pub mod skills;

pub use distance::{haversine_distance, validate_coordinates};
pub use error::CoreError;
pub use filters::{filter_candidates, filter_jobs, matches_projects, matches_skills, within_radius};
pub use recommender::{calculate_skill_match_score, Recommender};
pub use scoring::{score_candidate, DISTANCE_WEIGHT, PROJECT_WEIGHT, SKILL_WEIGHT};
pub use search::{validate_spec, CandidateSearch, SearchPage};
pub use skills::{skill_match_percentage, skill_overlap_fraction};
