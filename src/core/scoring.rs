use crate::core::{distance::haversine_distance, skills::skill_overlap_fraction};
use crate::models::{CandidateRecord, SearchSpec};

/// Weight of the skill component
pub const SKILL_WEIGHT: f64 = 0.6;
/// Weight of the distance component
pub const DISTANCE_WEIGHT: f64 = 0.3;
/// Weight of the project component
pub const PROJECT_WEIGHT: f64 = 0.1;

/// Calculate a relevance score (0.0 to 1.0) for a candidate against a search
///
/// Scoring formula:
/// score = (
///     skill_score * 0.6 +      # Level-weighted share of requested skills
///     distance_score * 0.3 +   # Linear decay to zero at the radius edge
///     project_score * 0.1      # Share of project terms found
/// )
///
/// The weights are fixed.
pub fn score_candidate(candidate: &CandidateRecord, spec: &SearchSpec) -> f64 {
    let skill_score = calculate_skill_score(candidate, spec);
    let distance_score = calculate_distance_score(candidate, spec);
    let project_score = calculate_project_score(candidate, &spec.project_terms);

    SKILL_WEIGHT * skill_score + DISTANCE_WEIGHT * distance_score + PROJECT_WEIGHT * project_score
}

/// Skill score (0-1)
#[inline]
fn calculate_skill_score(candidate: &CandidateRecord, spec: &SearchSpec) -> f64 {
    skill_overlap_fraction(&spec.skills, &candidate.skills, spec.min_skill_level)
}

/// Distance score (0-1)
/// 1.0 at the origin, 0.0 at or beyond the radius. Zero when no radius is
/// active or the candidate has no location.
#[inline]
fn calculate_distance_score(candidate: &CandidateRecord, spec: &SearchSpec) -> f64 {
    let (Some(radius), Some(location)) = (spec.radius_filter(), candidate.location.as_ref()) else {
        return 0.0;
    };

    let distance_km = haversine_distance(
        radius.latitude,
        radius.longitude,
        location.latitude,
        location.longitude,
    );

    (1.0 - distance_km / radius.radius_km).max(0.0)
}

/// Project score (0-1)
/// Terms are looked up in all project titles followed by all project tags.
#[inline]
fn calculate_project_score(candidate: &CandidateRecord, terms: &[String]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let titles: Vec<&str> = candidate.projects.iter().map(|p| p.title.as_str()).collect();
    let tags: Vec<&str> = candidate.projects.iter().map(|p| p.tags.as_str()).collect();
    let haystack = format!("{} {}", titles.join(" "), tags.join(" ")).to_lowercase();

    let hits = terms
        .iter()
        .filter(|term| haystack.contains(term.to_lowercase().as_str()))
        .count();

    hits as f64 / terms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationRecord, ProjectRecord, SkillRecord};

    fn create_test_candidate(
        skills: &[(&str, u8)],
        location: Option<(f64, f64)>,
    ) -> CandidateRecord {
        CandidateRecord {
            id: 1,
            full_name: "Test Candidate".to_string(),
            headline: String::new(),
            summary: String::new(),
            years_experience: 5,
            location: location.map(|(latitude, longitude)| LocationRecord {
                city: String::new(),
                country: String::new(),
                latitude,
                longitude,
            }),
            skills: skills.iter().map(|(n, l)| SkillRecord::new(*n, *l)).collect(),
            projects: vec![ProjectRecord {
                title: "Payments API".to_string(),
                tags: "fintech,rust".to_string(),
                url: String::new(),
            }],
        }
    }

    fn create_test_spec() -> SearchSpec {
        SearchSpec {
            skills: vec!["Python".to_string(), "Django".to_string()],
            require_all_skills: false,
            min_skill_level: 3,
            project_terms: vec![],
            origin_latitude: None,
            origin_longitude: None,
            radius_km: None,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((SKILL_WEIGHT + DISTANCE_WEIGHT + PROJECT_WEIGHT - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_more_skills_score_higher() {
        let spec = create_test_spec();
        let strong = create_test_candidate(&[("Python", 5), ("Django", 5)], None);
        let weak = create_test_candidate(&[("Python", 3)], None);

        let strong_score = score_candidate(&strong, &spec);
        let weak_score = score_candidate(&weak, &spec);

        assert!((strong_score - 0.6).abs() < 1e-9);
        assert!(strong_score > weak_score);
    }

    #[test]
    fn test_distance_score_linear_decay() {
        let mut spec = create_test_spec();
        spec.skills.clear();
        spec.origin_latitude = Some(0.0);
        spec.origin_longitude = Some(0.0);
        spec.radius_km = Some(100.0);

        let at_origin = create_test_candidate(&[], Some((0.0, 0.0)));
        assert!((calculate_distance_score(&at_origin, &spec) - 1.0).abs() < 1e-9);

        // ~55.6 km north of the origin
        let midway = create_test_candidate(&[], Some((0.5, 0.0)));
        let score = calculate_distance_score(&midway, &spec);
        assert!(score > 0.4 && score < 0.5, "got {}", score);

        let beyond = create_test_candidate(&[], Some((5.0, 0.0)));
        assert_eq!(calculate_distance_score(&beyond, &spec), 0.0);

        let nowhere = create_test_candidate(&[], None);
        assert_eq!(calculate_distance_score(&nowhere, &spec), 0.0);
    }

    #[test]
    fn test_project_score_counts_terms() {
        let candidate = create_test_candidate(&[], None);
        let terms = vec!["RUST".to_string(), "payments".to_string(), "kafka".to_string()];
        let score = calculate_project_score(&candidate, &terms);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(calculate_project_score(&candidate, &[]), 0.0);
    }

    #[test]
    fn test_empty_spec_scores_zero() {
        let candidate = create_test_candidate(&[("Python", 5)], Some((10.0, 10.0)));
        assert_eq!(score_candidate(&candidate, &SearchSpec::default()), 0.0);
    }

    #[test]
    fn test_score_bounds() {
        let spec = SearchSpec {
            skills: vec!["Python".to_string()],
            min_skill_level: 0,
            project_terms: vec!["rust".to_string()],
            origin_latitude: Some(0.0),
            origin_longitude: Some(0.0),
            radius_km: Some(10.0),
            ..Default::default()
        };
        let perfect = create_test_candidate(&[("python", 5)], Some((0.0, 0.0)));
        let score = score_candidate(&perfect, &spec);
        assert!((score - 1.0).abs() < 1e-9);
        assert!(score <= 1.0 + 1e-12);
    }
}
