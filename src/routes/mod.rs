// Route exports
pub mod jobs;
pub mod search;

use actix_web::{web, HttpResponse};

use crate::core::{CandidateSearch, Recommender};
use crate::models::ErrorResponse;
use crate::services::RecordPools;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pools: RecordPools,
    pub search: CandidateSearch,
    pub recommender: Recommender,
    pub default_min_skill_level: u8,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(search::configure)
            .configure(jobs::configure),
    );
}

pub(crate) fn error_response(
    status: actix_web::http::StatusCode,
    error: &str,
    message: String,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}
