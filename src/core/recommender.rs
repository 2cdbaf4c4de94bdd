use crate::core::skills::skill_match_percentage;
use crate::models::{JobRecord, ProfileRecord, Recommendation};

/// Maximum number of entries in a recommendation list
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 20;

/// Skill match percentage (0-100) between a job and a profile
///
/// Uses the substring rule: a required skill counts when any profile skill
/// contains it or is contained in it. Levels are ignored.
pub fn calculate_skill_match_score(job: &JobRecord, profile: &ProfileRecord) -> f64 {
    skill_match_percentage(&job.required_skill_list(), &profile.skill_names())
}

/// Ranks jobs against profiles in either direction
#[derive(Debug, Clone)]
pub struct Recommender {
    limit: usize,
}

impl Recommender {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn with_default_limit() -> Self {
        Self::new(DEFAULT_RECOMMENDATION_LIMIT)
    }

    /// Profiles best matching a job's required skills
    ///
    /// Profiles for which `has_applied` returns true are excluded, as are
    /// profiles scoring zero.
    pub fn recommend_candidates<F>(
        &self,
        job: &JobRecord,
        profiles: Vec<ProfileRecord>,
        has_applied: F,
    ) -> Vec<Recommendation<ProfileRecord>>
    where
        F: Fn(&ProfileRecord) -> bool,
    {
        let required = job.required_skill_list();
        if required.is_empty() {
            return Vec::new();
        }

        let scored = profiles
            .into_iter()
            .filter(|profile| !has_applied(profile))
            .map(|profile| {
                let score = skill_match_percentage(&required, &profile.skill_names());
                Recommendation { item: profile, score }
            });

        let ranked = self.rank(scored);
        tracing::debug!("Recommending {} candidates for job {}", ranked.len(), job.id);
        ranked
    }

    /// Jobs best matching a candidate's skill names
    ///
    /// Jobs for which `has_applied` returns true are excluded, as are jobs
    /// scoring zero (including jobs without required skills).
    pub fn recommend_jobs<F>(
        &self,
        candidate_skills: &[String],
        jobs: Vec<JobRecord>,
        has_applied: F,
    ) -> Vec<Recommendation<JobRecord>>
    where
        F: Fn(&JobRecord) -> bool,
    {
        if candidate_skills.is_empty() {
            return Vec::new();
        }

        let scored = jobs
            .into_iter()
            .filter(|job| !has_applied(job))
            .map(|job| {
                let score = skill_match_percentage(&job.required_skill_list(), candidate_skills);
                Recommendation { item: job, score }
            });

        let ranked = self.rank(scored);
        tracing::debug!("Recommending {} jobs", ranked.len());
        ranked
    }

    /// Keep positive scores, sort descending (stable) and truncate to the limit
    fn rank<T>(&self, scored: impl Iterator<Item = Recommendation<T>>) -> Vec<Recommendation<T>> {
        let mut ranked: Vec<Recommendation<T>> = scored.filter(|r| r.score > 0.0).collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked.truncate(self.limit);
        ranked
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillRecord;
    use std::collections::HashSet;

    fn create_profile(id: i64, skills: &[&str]) -> ProfileRecord {
        ProfileRecord {
            id,
            full_name: format!("Profile {}", id),
            skills: skills.iter().map(|s| SkillRecord::new(*s, 3)).collect(),
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
            is_remote: true,
            visa_sponsorship: false,
            is_active: true,
        }
    }

    #[test]
    fn test_calculate_skill_match_score() {
        let job = create_job(1, "Python, Django, Docker");
        let profile = create_profile(1, &["python3", "Django REST"]);
        assert_eq!(calculate_skill_match_score(&job, &profile), 66.7);
    }

    #[test]
    fn test_recommend_candidates_ranked_and_filtered() {
        let recommender = Recommender::default();
        let job = create_job(1, "Python, Django");
        let profiles = vec![
            create_profile(1, &["Python"]),
            create_profile(2, &["Python", "Django"]),
            create_profile(3, &["Java"]),
        ];

        let result = recommender.recommend_candidates(&job, profiles, |_| false);
        let ids: Vec<i64> = result.iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(result[0].score, 100.0);
        assert_eq!(result[1].score, 50.0);
    }

    #[test]
    fn test_recommend_candidates_excludes_applied() {
        let recommender = Recommender::default();
        let job = create_job(1, "Python");
        let applied: HashSet<i64> = [2].into_iter().collect();
        let profiles = vec![create_profile(1, &["Python"]), create_profile(2, &["Python"])];

        let result = recommender.recommend_candidates(&job, profiles, |p| applied.contains(&p.id));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item.id, 1);
    }

    #[test]
    fn test_job_without_required_skills_recommends_nobody() {
        let recommender = Recommender::default();
        let job = create_job(1, " , ");
        let result =
            recommender.recommend_candidates(&job, vec![create_profile(1, &["Python"])], |_| false);
        assert!(result.is_empty());
    }

    #[test]
    fn test_recommend_jobs_cap_and_stable_ties() {
        let recommender = Recommender::default();
        let jobs: Vec<JobRecord> = (0..30).map(|i| create_job(i, "Rust")).collect();
        let skills = vec!["rust".to_string()];

        let result = recommender.recommend_jobs(&skills, jobs, |_| false);
        assert_eq!(result.len(), 20);
        let ids: Vec<i64> = result.iter().map(|r| r.item.id).collect();
        assert_eq!(ids, (0..20).collect::<Vec<i64>>());
    }

    #[test]
    fn test_recommend_jobs_excludes_applied_and_zero_scores() {
        let recommender = Recommender::new(5);
        let jobs = vec![
            create_job(1, "Go, Kubernetes"),
            create_job(2, "Go"),
            create_job(3, "COBOL"),
            create_job(4, ""),
        ];
        let skills = vec!["Go".to_string()];

        let result = recommender.recommend_jobs(&skills, jobs, |j| j.id == 2);
        let ids: Vec<i64> = result.iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(result[0].score, 50.0);
    }

    #[test]
    fn test_recommend_jobs_without_candidate_skills() {
        let recommender = Recommender::default();
        let result = recommender.recommend_jobs(&[], vec![create_job(1, "Go")], |_| false);
        assert!(result.is_empty());
    }
}
