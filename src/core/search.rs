use crate::core::{
    distance::{haversine_distance, validate_coordinates, validate_latitude, validate_longitude},
    error::CoreError,
    filters::filter_candidates,
    scoring::score_candidate,
};
use crate::models::{CandidateRecord, ScoredCandidate, SearchSpec, MAX_SKILL_LEVEL};

/// Default number of candidates per result page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of ranked search results
#[derive(Debug)]
pub struct SearchPage {
    pub results: Vec<ScoredCandidate>,
    /// Candidates that passed the filter, across all pages
    pub count: usize,
    pub num_pages: usize,
    pub page: usize,
}

/// Candidate search orchestrator
///
/// # Pipeline Stages
/// 1. Validate the search spec
/// 2. Filter the pool (skills, projects, radius)
/// 3. Score every remaining candidate
/// 4. Rank by score and paginate
#[derive(Debug, Clone)]
pub struct CandidateSearch {
    page_size: usize,
}

impl CandidateSearch {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Search a candidate pool
    ///
    /// # Arguments
    /// * `pool` - Candidates materialised by the caller for this search
    /// * `spec` - Search constraints
    /// * `page` - 1-based page number; out-of-range pages resolve to the last page
    ///
    /// # Returns
    /// SearchPage with results sorted by descending score. Equal scores keep pool order.
    pub fn search(
        &self,
        pool: Vec<CandidateRecord>,
        spec: &SearchSpec,
        page: usize,
    ) -> Result<SearchPage, CoreError> {
        validate_spec(spec)?;

        let pool_size = pool.len();
        let filtered = filter_candidates(pool, spec);
        let origin = spec.origin();

        let mut scored: Vec<ScoredCandidate> = filtered
            .into_iter()
            .map(|candidate| {
                let score = score_candidate(&candidate, spec);
                let distance_km = match (origin, candidate.location.as_ref()) {
                    (Some((lat, lon)), Some(location)) => Some(haversine_distance(
                        lat,
                        lon,
                        location.latitude,
                        location.longitude,
                    )),
                    _ => None,
                };

                ScoredCandidate {
                    candidate,
                    score,
                    distance_km,
                }
            })
            .collect();

        // Stable sort keeps pool order for equal scores
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let count = scored.len();
        let num_pages = count.div_ceil(self.page_size).max(1);
        let page = if page < 1 || page > num_pages { num_pages } else { page };

        let results: Vec<ScoredCandidate> = scored
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        tracing::debug!(
            "Candidate search: {} of {} candidates matched, returning page {}/{}",
            count,
            pool_size,
            page,
            num_pages
        );

        Ok(SearchPage {
            results,
            count,
            num_pages,
            page,
        })
    }
}

impl Default for CandidateSearch {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Reject specs whose numeric fields cannot produce a meaningful result
pub fn validate_spec(spec: &SearchSpec) -> Result<(), CoreError> {
    if spec.min_skill_level > MAX_SKILL_LEVEL {
        return Err(CoreError::InvalidSkillLevel(spec.min_skill_level));
    }

    match (spec.origin_latitude, spec.origin_longitude) {
        (Some(lat), Some(lon)) => validate_coordinates(lat, lon)?,
        (Some(lat), None) => validate_latitude(lat)?,
        (None, Some(lon)) => validate_longitude(lon)?,
        (None, None) => {}
    }

    if let Some(radius_km) = spec.radius_km {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(CoreError::InvalidRadius(radius_km));
        }
    }

    Ok(())
}
