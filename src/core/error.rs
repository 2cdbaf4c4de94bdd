use thiserror::Error;

/// Input contract violations rejected before filtering or scoring
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid latitude: {0} (expected a finite value in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (expected a finite value in [-180, 180])")]
    InvalidLongitude(f64),

    #[error("Invalid radius: {0} km (expected a finite, non-negative value)")]
    InvalidRadius(f64),

    #[error("Invalid skill level: {0} (expected 0-5)")]
    InvalidSkillLevel(u8),
}
