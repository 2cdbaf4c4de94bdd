use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{HealthResponse, SearchCandidatesRequest, SearchCandidatesResponse};
use crate::routes::{error_response, AppState};

/// Configure health and candidate search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/candidates/search", web::post().to(search_candidates));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.pools.health_check().await { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache: state.pools.cache_stats(),
    })
}

/// Candidate search endpoint
///
/// POST /api/v1/candidates/search
///
/// Request body:
/// ```json
/// {
///   "skills": ["Python", "Django"],
///   "requireAllSkills": false,
///   "minSkillLevel": 3,
///   "projects": ["payments"],
///   "location": {"lat": 37.7749, "lng": -122.4194, "radiusKm": 50},
///   "page": 1
/// }
/// ```
async fn search_candidates(
    state: web::Data<AppState>,
    req: web::Json<SearchCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for candidate search: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let spec = req.to_spec(state.default_min_skill_level);

    let pool = match state.pools.candidates().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to load candidates: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load candidates",
                e.to_string(),
            );
        }
    };

    let page = match state.search.search(pool, &spec, req.page as usize) {
        Ok(page) => page,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid search", e.to_string());
        }
    };

    tracing::info!(
        "Candidate search matched {} candidates, returning page {}/{}",
        page.count,
        page.page,
        page.num_pages
    );

    HttpResponse::Ok().json(SearchCandidatesResponse {
        count: page.count,
        num_pages: page.num_pages,
        page: page.page,
        results: page.results,
    })
}
