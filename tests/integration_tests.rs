// Integration tests for Talent Match

use std::collections::HashSet;
use talent_match::core::{
    filter_candidates, score_candidate, CandidateSearch, Recommender,
};
use talent_match::models::{CandidateRecord, JobRecord, ProfileRecord, SearchSpec, SkillRecord};

fn load_candidates() -> Vec<CandidateRecord> {
    serde_json::from_str(include_str!("fixtures/candidates.json")).expect("valid fixture")
}

fn names(candidates: &[CandidateRecord]) -> Vec<&str> {
    candidates.iter().map(|c| c.full_name.as_str()).collect()
}

fn skill_spec(skills: &[&str], require_all: bool, min_level: u8) -> SearchSpec {
    SearchSpec {
        skills: skills.iter().map(|s| s.to_string()).collect(),
        require_all_skills: require_all,
        min_skill_level: min_level,
        ..Default::default()
    }
}

fn create_job(id: i64, skills: &str) -> JobRecord {
    JobRecord {
        id,
        title: format!("Job {}", id),
        description: String::new(),
        required_skills: skills.to_string(),
        location: String::new(),
        latitude: None,
        longitude: None,
        salary_min: None,
        salary_max: None,
        is_remote: false,
        visa_sponsorship: false,
        is_active: true,
    }
}

fn create_profile(id: i64, skills: &[&str]) -> ProfileRecord {
    ProfileRecord {
        id,
        full_name: format!("Profile {}", id),
        skills: skills.iter().map(|s| SkillRecord::new(*s, 3)).collect(),
    }
}

#[test]
fn test_skill_filter_require_any() {
    let pool: Vec<CandidateRecord> = load_candidates()
        .into_iter()
        .filter(|c| c.full_name == "Alex Rivera" || c.full_name == "Jordan Lee")
        .collect();

    let result = filter_candidates(pool, &skill_spec(&["Python"], false, 3));
    assert_eq!(names(&result), vec!["Alex Rivera"]);
}

#[test]
fn test_skill_filter_require_all() {
    let result = filter_candidates(load_candidates(), &skill_spec(&["Python", "Django"], true, 3));
    assert_eq!(names(&result), vec!["Alex Rivera", "Sam Okafor"]);

    // Django@3 fails a level-4 requirement
    let result = filter_candidates(load_candidates(), &skill_spec(&["Python", "Django"], true, 4));
    assert_eq!(names(&result), vec!["Sam Okafor"]);
}

#[test]
fn test_radius_filter() {
    let spec = SearchSpec {
        origin_latitude: Some(37.7749),
        origin_longitude: Some(-122.4194),
        radius_km: Some(50.0),
        ..Default::default()
    };

    let result = filter_candidates(load_candidates(), &spec);
    // New York and Los Angeles are out of range; Sam has no location
    assert_eq!(names(&result), vec!["Alex Rivera"]);
}

#[test]
fn test_combined_stages() {
    let spec = SearchSpec {
        skills: vec!["python".to_string()],
        min_skill_level: 2,
        project_terms: vec!["kafka".to_string(), "postgis".to_string()],
        origin_latitude: Some(37.7749),
        origin_longitude: Some(-122.4194),
        radius_km: Some(5000.0),
        ..Default::default()
    };

    let result = filter_candidates(load_candidates(), &spec);
    assert_eq!(names(&result), vec!["Alex Rivera", "Jordan Lee"]);
}

#[test]
fn test_score_ordering() {
    let spec = skill_spec(&["Python", "Django"], false, 3);
    let candidates = load_candidates();
    let alex = candidates.iter().find(|c| c.full_name == "Alex Rivera").unwrap();
    let sam = candidates.iter().find(|c| c.full_name == "Sam Okafor").unwrap();
    let jordan = candidates.iter().find(|c| c.full_name == "Jordan Lee").unwrap();

    // Both skills at 5 beat one skill at 3
    assert!(score_candidate(sam, &spec) > score_candidate(alex, &spec));
    assert!(score_candidate(alex, &spec) > score_candidate(jordan, &spec));
}

#[test]
fn test_score_bounds() {
    let specs = vec![
        SearchSpec::default(),
        skill_spec(&["Python", "Django", "React"], false, 0),
        SearchSpec {
            skills: vec!["React".to_string()],
            project_terms: vec!["react".to_string(), "css".to_string()],
            origin_latitude: Some(34.0522),
            origin_longitude: Some(-118.2437),
            radius_km: Some(1.0),
            ..Default::default()
        },
    ];

    for spec in &specs {
        for candidate in &load_candidates() {
            let score = score_candidate(candidate, spec);
            assert!((0.0..=1.0 + 1e-12).contains(&score), "score {} out of range", score);
        }
    }
}

#[test]
fn test_empty_spec_idempotence() {
    let pool = load_candidates();
    let spec = SearchSpec::default();

    let result = filter_candidates(pool.clone(), &spec);
    assert_eq!(result, pool);

    for candidate in &pool {
        assert_eq!(score_candidate(candidate, &spec), 0.0);
    }
}

#[test]
fn test_end_to_end_search() {
    let search = CandidateSearch::default();
    let spec = SearchSpec {
        skills: vec!["Python".to_string(), "Django".to_string()],
        min_skill_level: 3,
        origin_latitude: Some(37.7749),
        origin_longitude: Some(-122.4194),
        radius_km: Some(1000.0),
        ..Default::default()
    };

    let page = search.search(load_candidates(), &spec, 1).unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].candidate.full_name, "Alex Rivera");
    assert_eq!(page.results[0].distance_km, Some(0.0));
    // 0.6 * (4/5 + 3/5) / 2 + 0.3 * 1.0
    assert!((page.results[0].score - 0.72).abs() < 1e-9);
}

#[test]
fn test_recommendation_exclusion() {
    let recommender = Recommender::default();
    let job = create_job(1, "Python, Django");
    let applied: HashSet<i64> = [1, 3].into_iter().collect();
    let profiles = vec![
        create_profile(1, &["Python", "Django"]),
        create_profile(2, &["Python"]),
        create_profile(3, &["Django"]),
    ];

    let result = recommender.recommend_candidates(&job, profiles, |p| applied.contains(&p.id));
    assert!(result.iter().all(|r| !applied.contains(&r.item.id)));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].item.id, 2);
}

#[test]
fn test_recommendation_cap_and_order() {
    let recommender = Recommender::default();
    let jobs: Vec<JobRecord> = (0..40)
        .map(|i| {
            if i % 2 == 0 {
                create_job(i, "Rust")
            } else {
                create_job(i, "Rust, Go")
            }
        })
        .collect();
    let skills = vec!["rust".to_string()];

    let result = recommender.recommend_jobs(&skills, jobs, |_| false);
    assert_eq!(result.len(), 20);

    for i in 1..result.len() {
        assert!(result[i - 1].score >= result[i].score, "Recommendations not sorted by score");
        if result[i - 1].score == result[i].score {
            assert!(result[i - 1].item.id < result[i].item.id, "Ties must keep pool order");
        }
    }
    assert!(result.iter().all(|r| r.score == 100.0));
}
