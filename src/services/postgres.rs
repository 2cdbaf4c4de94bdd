use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    proficiency_level, CandidateRecord, JobRecord, LocationRecord, ProfileRecord, ProjectRecord,
    SkillRecord,
};

/// Errors that can occur when reading from PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Read-only PostgreSQL client over the recruiting application's tables
///
/// The schema is owned by the application; this client only materialises
/// candidate, job and profile pools for matching.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Load every candidate with location, skills and projects
    pub async fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, PostgresError> {
        let query = r#"
            SELECT c.id::bigint AS id, c.full_name, c.headline, c.summary,
                   c.years_experience::bigint AS years_experience,
                   l.city, l.country, l.latitude, l.longitude
            FROM candidates_candidate c
            LEFT JOIN candidates_location l ON l.id = c.location_id
            ORDER BY c.id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let mut skills = self.fetch_candidate_skills().await?;
        let mut projects = self.fetch_candidate_projects().await?;

        let candidates: Result<Vec<CandidateRecord>, PostgresError> = rows
            .iter()
            .map(|row| {
                let id: i64 = row.try_get("id")?;
                Ok(CandidateRecord {
                    id,
                    full_name: row.try_get("full_name")?,
                    headline: row.try_get("headline")?,
                    summary: row.try_get("summary")?,
                    years_experience: non_negative(
                        row.try_get("years_experience")?,
                        "years_experience",
                    )?,
                    location: location_from_row(row)?,
                    skills: skills.remove(&id).unwrap_or_default(),
                    projects: projects.remove(&id).unwrap_or_default(),
                })
            })
            .collect();

        let candidates = candidates?;
        tracing::debug!("Loaded {} candidates", candidates.len());
        Ok(candidates)
    }

    async fn fetch_candidate_skills(
        &self,
    ) -> Result<HashMap<i64, Vec<SkillRecord>>, PostgresError> {
        let query = r#"
            SELECT cs.candidate_id::bigint AS candidate_id, s.name, cs.level::int AS level
            FROM candidates_candidateskill cs
            JOIN candidates_skill s ON s.id = cs.skill_id
            ORDER BY cs.id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let mut by_candidate: HashMap<i64, Vec<SkillRecord>> = HashMap::new();
        for row in &rows {
            let level: i32 = row.try_get("level")?;
            by_candidate
                .entry(row.try_get("candidate_id")?)
                .or_default()
                .push(SkillRecord::new(row.try_get::<String, _>("name")?, clamp_level(level)));
        }

        Ok(by_candidate)
    }

    async fn fetch_candidate_projects(
        &self,
    ) -> Result<HashMap<i64, Vec<ProjectRecord>>, PostgresError> {
        let query = r#"
            SELECT cp.candidate_id::bigint AS candidate_id, p.title, p.tags, p.url
            FROM candidates_candidate_projects cp
            JOIN candidates_project p ON p.id = cp.project_id
            ORDER BY cp.id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let mut by_candidate: HashMap<i64, Vec<ProjectRecord>> = HashMap::new();
        for row in &rows {
            by_candidate
                .entry(row.try_get("candidate_id")?)
                .or_default()
                .push(ProjectRecord {
                    title: row.try_get("title")?,
                    tags: row.try_get("tags")?,
                    url: row.try_get("url")?,
                });
        }

        Ok(by_candidate)
    }

    /// Load every job posting, newest first
    pub async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, PostgresError> {
        let query = r#"
            SELECT id::bigint AS id, title, description, skills, location,
                   salary_min::bigint AS salary_min, salary_max::bigint AS salary_max,
                   is_remote, visa_sponsorship, is_active
            FROM jobs_job
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let jobs: Result<Vec<JobRecord>, PostgresError> = rows
            .iter()
            .map(|row| {
                Ok(JobRecord {
                    id: row.try_get("id")?,
                    title: row.try_get("title")?,
                    description: row.try_get("description")?,
                    required_skills: row.try_get("skills")?,
                    location: row.try_get("location")?,
                    latitude: None,
                    longitude: None,
                    salary_min: optional_salary(row.try_get("salary_min")?)?,
                    salary_max: optional_salary(row.try_get("salary_max")?)?,
                    is_remote: row.try_get("is_remote")?,
                    visa_sponsorship: row.try_get("visa_sponsorship")?,
                    is_active: row.try_get("is_active")?,
                })
            })
            .collect();

        let jobs = jobs?;
        tracing::debug!("Loaded {} jobs", jobs.len());
        Ok(jobs)
    }

    /// Load every job seeker profile with its skills
    pub async fn fetch_profiles(&self) -> Result<Vec<ProfileRecord>, PostgresError> {
        let query = r#"
            SELECT p.id::bigint AS id,
                   COALESCE(
                       NULLIF(TRIM(COALESCE(u.first_name, '') || ' ' || COALESCE(u.last_name, '')), ''),
                       TRIM(p.first_name || ' ' || p.last_name)
                   ) AS full_name
            FROM profiles_profile p
            LEFT JOIN auth_user u ON u.id = p.user_id
            ORDER BY p.updated_at DESC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        let mut skills = self.fetch_profile_skills().await?;

        let profiles: Result<Vec<ProfileRecord>, PostgresError> = rows
            .iter()
            .map(|row| {
                let id: i64 = row.try_get("id")?;
                Ok(ProfileRecord {
                    id,
                    full_name: row.try_get("full_name")?,
                    skills: skills.remove(&id).unwrap_or_default(),
                })
            })
            .collect();

        let profiles = profiles?;
        tracing::debug!("Loaded {} profiles", profiles.len());
        Ok(profiles)
    }

    async fn fetch_profile_skills(&self) -> Result<HashMap<i64, Vec<SkillRecord>>, PostgresError> {
        let query = r#"
            SELECT ps.profile_id::bigint AS profile_id, s.name, ps.proficiency_level
            FROM profiles_profileskill ps
            JOIN profiles_skill s ON s.id = ps.skill_id
            ORDER BY ps.id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let mut by_profile: HashMap<i64, Vec<SkillRecord>> = HashMap::new();
        for row in &rows {
            let label: String = row.try_get("proficiency_level")?;
            by_profile
                .entry(row.try_get("profile_id")?)
                .or_default()
                .push(SkillRecord::new(
                    row.try_get::<String, _>("name")?,
                    proficiency_level(&label),
                ));
        }

        Ok(by_profile)
    }

    /// Profiles that already applied to a job
    pub async fn applied_profile_ids(&self, job_id: i64) -> Result<HashSet<i64>, PostgresError> {
        let query = r#"
            SELECT profile_id::bigint AS id
            FROM jobs_jobapplication
            WHERE job_id = $1
        "#;

        self.fetch_ids(query, job_id).await
    }

    /// Jobs a profile already applied to
    pub async fn applied_job_ids(&self, profile_id: i64) -> Result<HashSet<i64>, PostgresError> {
        let query = r#"
            SELECT job_id::bigint AS id
            FROM jobs_jobapplication
            WHERE profile_id = $1
        "#;

        self.fetch_ids(query, profile_id).await
    }

    async fn fetch_ids(&self, query: &str, key: i64) -> Result<HashSet<i64>, PostgresError> {
        let rows = sqlx::query(query).bind(key).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| row.try_get::<i64, _>("id").map_err(Into::into))
            .collect()
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn location_from_row(row: &PgRow) -> Result<Option<LocationRecord>, PostgresError> {
    let latitude: Option<f64> = row.try_get("latitude")?;
    let longitude: Option<f64> = row.try_get("longitude")?;

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(Some(LocationRecord {
            city: row.try_get::<Option<String>, _>("city")?.unwrap_or_default(),
            country: row.try_get::<Option<String>, _>("country")?.unwrap_or_default(),
            latitude,
            longitude,
        })),
        _ => Ok(None),
    }
}

fn clamp_level(level: i32) -> u8 {
    level.clamp(0, crate::models::MAX_SKILL_LEVEL as i32) as u8
}

fn non_negative(value: i64, field: &str) -> Result<u32, PostgresError> {
    u32::try_from(value)
        .map_err(|_| PostgresError::InvalidData(format!("{} out of range: {}", field, value)))
}

fn optional_salary(value: Option<i64>) -> Result<Option<u32>, PostgresError> {
    value.map(|v| non_negative(v, "salary")).transpose()
}
