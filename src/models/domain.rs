use serde::{Deserialize, Deserializer, Serialize};

/// Highest proficiency level a skill can carry
pub const MAX_SKILL_LEVEL: u8 = 5;

/// A candidate's proficiency in a named skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
}

impl SkillRecord {
    /// Build a skill record, clamping the level into `0..=5`
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(MAX_SKILL_LEVEL),
        }
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, MAX_SKILL_LEVEL as i64) as u8)
}

/// A portfolio project attached to a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    /// Free text, comma or space separated
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Candidate as materialised from the record store for one search call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub location: Option<LocationRecord>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// Job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated list of required skills
    #[serde(default)]
    pub required_skills: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub visa_sponsorship: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl JobRecord {
    /// Required skills split on commas, trimmed and lowercased, blanks dropped
    pub fn required_skill_list(&self) -> Vec<String> {
        self.required_skills
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn default_true() -> bool { true }

/// Job seeker profile used by the recommendation paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

impl ProfileRecord {
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}

/// Map a profile proficiency label onto the numeric skill scale
pub fn proficiency_level(label: &str) -> u8 {
    match label.trim().to_lowercase().as_str() {
        "beginner" => 2,
        "intermediate" => 3,
        "advanced" => 4,
        "expert" => 5,
        _ => 3,
    }
}

/// Search constraints for the candidate filter and scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSpec {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub require_all_skills: bool,
    #[serde(default)]
    pub min_skill_level: u8,
    #[serde(default)]
    pub project_terms: Vec<String>,
    #[serde(default)]
    pub origin_latitude: Option<f64>,
    #[serde(default)]
    pub origin_longitude: Option<f64>,
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Origin and radius of an active radius constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl SearchSpec {
    /// Both origin coordinates, if present
    pub fn origin(&self) -> Option<(f64, f64)> {
        match (self.origin_latitude, self.origin_longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// The radius constraint, active only with both coordinates and a positive radius.
    /// A zero radius disables the constraint.
    pub fn radius_filter(&self) -> Option<RadiusFilter> {
        let (latitude, longitude) = self.origin()?;
        match self.radius_km {
            Some(radius_km) if radius_km > 0.0 => Some(RadiusFilter {
                latitude,
                longitude,
                radius_km,
            }),
            _ => None,
        }
    }
}

/// Candidate together with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: CandidateRecord,
    pub score: f64,
    pub distance_km: Option<f64>,
}

/// One entry of a recommendation list, score on the 0-100 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(rename = "matchScore")]
    pub score: f64,
}
