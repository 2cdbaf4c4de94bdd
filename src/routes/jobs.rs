use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::core::{calculate_skill_match_score, filter_jobs};
use crate::models::{
    JobListQuery, JobListResponse, RecommendedCandidatesResponse, RecommendedJobsResponse,
    SkillMatchResponse,
};
use crate::routes::{error_response, AppState};

/// Configure job listing and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/jobs", web::get().to(list_jobs))
        .route("/jobs/{job_id}/recommended-candidates", web::get().to(recommended_candidates))
        .route("/jobs/{job_id}/match/{profile_id}", web::get().to(skill_match))
        .route("/profiles/{profile_id}/recommended-jobs", web::get().to(recommended_jobs));
}

fn load_failed(what: &str, e: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("Failed to load {}: {}", what, e);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &format!("Failed to load {}", what),
        e.to_string(),
    )
}

fn not_found(what: &str, id: i64) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        &format!("{} not found", what),
        format!("No {} with id {}", what.to_lowercase(), id),
    )
}

/// Job listing
///
/// GET /api/v1/jobs?title=&skills=python,django&location=&salary_min=&salary_max=
///     &is_remote=true&visa_sponsorship=true
async fn list_jobs(state: web::Data<AppState>, query: web::Query<JobListQuery>) -> impl Responder {
    let jobs = match state.pools.jobs().await {
        Ok(jobs) => jobs,
        Err(e) => return load_failed("jobs", e),
    };

    let jobs = filter_jobs(jobs, &query);

    HttpResponse::Ok().json(JobListResponse {
        count: jobs.len(),
        jobs,
    })
}

/// Candidates recommended for a job, excluding those who already applied
///
/// GET /api/v1/jobs/{job_id}/recommended-candidates
async fn recommended_candidates(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let job_id = path.into_inner();

    let job = match state.pools.jobs().await {
        Ok(jobs) => jobs.into_iter().find(|j| j.id == job_id),
        Err(e) => return load_failed("jobs", e),
    };
    let Some(job) = job else {
        return not_found("Job", job_id);
    };

    let profiles = match state.pools.profiles().await {
        Ok(profiles) => profiles,
        Err(e) => return load_failed("profiles", e),
    };

    let applied = match state.pools.applied_profile_ids(job_id).await {
        Ok(applied) => applied,
        Err(e) => return load_failed("applications", e),
    };

    let candidates = state
        .recommender
        .recommend_candidates(&job, profiles, |p| applied.contains(&p.id));

    tracing::info!("Returning {} recommended candidates for job {}", candidates.len(), job_id);

    HttpResponse::Ok().json(RecommendedCandidatesResponse { job_id, candidates })
}

/// Jobs recommended for a profile, excluding those already applied to
///
/// GET /api/v1/profiles/{profile_id}/recommended-jobs
async fn recommended_jobs(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let profile_id = path.into_inner();

    let profile = match state.pools.profiles().await {
        Ok(profiles) => profiles.into_iter().find(|p| p.id == profile_id),
        Err(e) => return load_failed("profiles", e),
    };
    let Some(profile) = profile else {
        return not_found("Profile", profile_id);
    };

    let jobs = match state.pools.jobs().await {
        Ok(jobs) => jobs.into_iter().filter(|j| j.is_active).collect::<Vec<_>>(),
        Err(e) => return load_failed("jobs", e),
    };

    let applied = match state.pools.applied_job_ids(profile_id).await {
        Ok(applied) => applied,
        Err(e) => return load_failed("applications", e),
    };

    let jobs = state
        .recommender
        .recommend_jobs(&profile.skill_names(), jobs, |j| applied.contains(&j.id));

    tracing::info!("Returning {} recommended jobs for profile {}", jobs.len(), profile_id);

    HttpResponse::Ok().json(RecommendedJobsResponse { profile_id, jobs })
}

/// Skill match percentage between one job and one profile
///
/// GET /api/v1/jobs/{job_id}/match/{profile_id}
async fn skill_match(state: web::Data<AppState>, path: web::Path<(i64, i64)>) -> impl Responder {
    let (job_id, profile_id) = path.into_inner();

    let job = match state.pools.jobs().await {
        Ok(jobs) => jobs.into_iter().find(|j| j.id == job_id),
        Err(e) => return load_failed("jobs", e),
    };
    let Some(job) = job else {
        return not_found("Job", job_id);
    };

    let profile = match state.pools.profiles().await {
        Ok(profiles) => profiles.into_iter().find(|p| p.id == profile_id),
        Err(e) => return load_failed("profiles", e),
    };
    let Some(profile) = profile else {
        return not_found("Profile", profile_id);
    };

    HttpResponse::Ok().json(SkillMatchResponse {
        job_id,
        profile_id,
        match_score: calculate_skill_match_score(&job, &profile),
    })
}
