use crate::core::{distance::haversine_distance, skills::has_skill_at_level};
use crate::models::{CandidateRecord, JobListQuery, JobRecord, RadiusFilter, SearchSpec};

/// Narrow a candidate pool to those satisfying every active constraint of `spec`
///
/// Stages run in a fixed order, cheapest first:
/// 1. Skills (exact name, minimum level, all or any)
/// 2. Project terms (substring of any project title or tags)
/// 3. Radius around the origin (candidates without a location are dropped)
///
/// Input order is preserved.
pub fn filter_candidates(pool: Vec<CandidateRecord>, spec: &SearchSpec) -> Vec<CandidateRecord> {
    let radius = spec.radius_filter();

    pool.into_iter()
        // Stage 1: Skills
        .filter(|candidate| matches_skills(candidate, spec))
        // Stage 2: Projects
        .filter(|candidate| matches_projects(candidate, &spec.project_terms))
        // Stage 3: Radius
        .filter(|candidate| match &radius {
            Some(radius) => within_radius(candidate, radius),
            None => true,
        })
        .collect()
}

/// Skill stage. Passes everything when no skills are requested.
#[inline]
pub fn matches_skills(candidate: &CandidateRecord, spec: &SearchSpec) -> bool {
    if spec.skills.is_empty() {
        return true;
    }

    let held = |name: &String| has_skill_at_level(&candidate.skills, name, spec.min_skill_level);

    if spec.require_all_skills {
        spec.skills.iter().all(held)
    } else {
        spec.skills.iter().any(held)
    }
}

/// Project stage. Passes everything when no terms are requested.
#[inline]
pub fn matches_projects(candidate: &CandidateRecord, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }

    let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();

    candidate.projects.iter().any(|project| {
        let title = project.title.to_lowercase();
        let tags = project.tags.to_lowercase();
        terms
            .iter()
            .any(|term| title.contains(term.as_str()) || tags.contains(term.as_str()))
    })
}

/// Radius stage. Candidates without a location never pass.
#[inline]
pub fn within_radius(candidate: &CandidateRecord, radius: &RadiusFilter) -> bool {
    match &candidate.location {
        Some(location) => {
            haversine_distance(
                radius.latitude,
                radius.longitude,
                location.latitude,
                location.longitude,
            ) <= radius.radius_km
        }
        None => false,
    }
}

/// Filter the job listing. Inactive jobs are always dropped.
///
/// Every comma-separated skill in the query must appear somewhere in the job's
/// required skills text. Salary bounds compare against either end of the job's
/// range; a job without the compared bound fails that comparison.
pub fn filter_jobs(jobs: Vec<JobRecord>, query: &JobListQuery) -> Vec<JobRecord> {
    let title = non_blank_lower(query.title.as_deref());
    let location = non_blank_lower(query.location.as_deref());
    let skills: Vec<String> = query
        .skills
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    jobs.into_iter()
        .filter(|job| job.is_active)
        .filter(|job| match &title {
            Some(title) => job.title.to_lowercase().contains(title.as_str()),
            None => true,
        })
        .filter(|job| {
            let required = job.required_skills.to_lowercase();
            skills.iter().all(|skill| required.contains(skill.as_str()))
        })
        .filter(|job| match &location {
            Some(location) => job.location.to_lowercase().contains(location.as_str()),
            None => true,
        })
        .filter(|job| match query.salary_min {
            Some(min) => {
                job.salary_max.is_some_and(|v| v >= min) || job.salary_min.is_some_and(|v| v >= min)
            }
            None => true,
        })
        .filter(|job| match query.salary_max {
            Some(max) => {
                job.salary_min.is_some_and(|v| v <= max) || job.salary_max.is_some_and(|v| v <= max)
            }
            None => true,
        })
        .filter(|job| !query.is_remote || job.is_remote)
        .filter(|job| !query.visa_sponsorship || job.visa_sponsorship)
        .collect()
}

fn non_blank_lower(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}
