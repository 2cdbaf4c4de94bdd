use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{SearchSpec, MAX_SKILL_LEVEL};

/// Location block of a candidate search request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchLocation {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(alias = "radius_km", rename = "radiusKm")]
    pub radius_km: Option<f64>,
}

/// Request to search candidates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchCandidatesRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    #[serde(alias = "require_all_skills", rename = "requireAllSkills")]
    pub require_all_skills: bool,
    /// Falls back to the configured default when absent
    #[validate(range(max = 5))]
    #[serde(default)]
    #[serde(alias = "min_skill_level", rename = "minSkillLevel")]
    pub min_skill_level: Option<u8>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[validate(nested)]
    #[serde(default)]
    pub location: Option<SearchLocation>,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl SearchCandidatesRequest {
    /// Convert into a search spec, dropping blank skill and project entries
    pub fn to_spec(&self, default_min_skill_level: u8) -> SearchSpec {
        let location = self.location.clone().unwrap_or_default();
        SearchSpec {
            skills: non_blank(&self.skills),
            require_all_skills: self.require_all_skills,
            min_skill_level: self
                .min_skill_level
                .unwrap_or(default_min_skill_level)
                .min(MAX_SKILL_LEVEL),
            project_terms: non_blank(&self.projects),
            origin_latitude: location.lat,
            origin_longitude: location.lng,
            radius_km: location.radius_km,
        }
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Query string of the job listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobListQuery {
    pub title: Option<String>,
    /// Comma-separated skills, each must appear in the job's skills
    pub skills: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub visa_sponsorship: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: SearchCandidatesRequest = serde_json::from_str("{}").unwrap();
        assert!(req.skills.is_empty());
        assert!(!req.require_all_skills);
        assert_eq!(req.min_skill_level, None);
        assert_eq!(req.page, 1);
        assert!(req.validate().is_ok());
        assert_eq!(req.to_spec(3).min_skill_level, 3);
    }

    #[test]
    fn test_request_to_spec() {
        let req: SearchCandidatesRequest = serde_json::from_str(
            r#"{
                "skills": ["Python", " ", "Django"],
                "requireAllSkills": true,
                "minSkillLevel": 4,
                "projects": ["ml"],
                "location": {"lat": 37.7749, "lng": -122.4194, "radiusKm": 50}
            }"#,
        )
        .unwrap();

        let spec = req.to_spec(3);
        assert_eq!(spec.skills, vec!["Python", "Django"]);
        assert!(spec.require_all_skills);
        assert_eq!(spec.min_skill_level, 4);
        assert_eq!(spec.project_terms, vec!["ml"]);
        assert_eq!(spec.origin_latitude, Some(37.7749));
        assert_eq!(spec.radius_km, Some(50.0));
    }

    #[test]
    fn test_request_rejects_out_of_range_latitude() {
        let req: SearchCandidatesRequest = serde_json::from_str(
            r#"{"location": {"lat": 123.0, "lng": 0.0, "radiusKm": 10}}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_rejects_skill_level_above_five() {
        let req: SearchCandidatesRequest =
            serde_json::from_str(r#"{"minSkillLevel": 6}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
