//! Skill overlap rules.
//!
//! Candidate search and job recommendation score skills differently and the two
//! rules are kept apart:
//! - [`skill_overlap_fraction`]: exact (case-insensitive) names, level threshold,
//!   level-weighted, 0-1 scale.
//! - [`skill_match_percentage`]: substring match in either direction, no levels,
//!   0-100 scale.

use crate::models::{SkillRecord, MAX_SKILL_LEVEL};

/// Highest-level skill named `name` (ignoring case) held at `min_level` or above
///
/// Duplicate names are tolerated; the strongest qualifying row wins.
#[inline]
pub fn best_skill_at_level<'a>(
    skills: &'a [SkillRecord],
    name: &str,
    min_level: u8,
) -> Option<&'a SkillRecord> {
    let name = name.to_lowercase();
    skills
        .iter()
        .filter(|s| s.level >= min_level && s.name.to_lowercase() == name)
        .max_by_key(|s| s.level)
}

/// Whether any skill named `name` (ignoring case) is held at `min_level` or above
#[inline]
pub fn has_skill_at_level(skills: &[SkillRecord], name: &str, min_level: u8) -> bool {
    best_skill_at_level(skills, name, min_level).is_some()
}

/// Level-weighted fraction of required skills held by a candidate (0.0 to 1.0)
///
/// Each required skill contributes `level / 5` (at most 1.0) when the candidate
/// holds it at `min_level` or above. No required skills means no skill credit.
pub fn skill_overlap_fraction(
    required: &[String],
    candidate_skills: &[SkillRecord],
    min_level: u8,
) -> f64 {
    if required.is_empty() || candidate_skills.is_empty() {
        return 0.0;
    }

    let matched: f64 = required
        .iter()
        .filter_map(|name| best_skill_at_level(candidate_skills, name, min_level))
        .map(|skill| (skill.level as f64 / MAX_SKILL_LEVEL as f64).min(1.0))
        .sum();

    matched / required.len() as f64
}

/// Percentage (0-100, one decimal) of required skills covered by candidate skills
///
/// A required skill is covered when a candidate skill name contains it or is
/// contained in it, ignoring case. Blank names on either side never match.
pub fn skill_match_percentage(required: &[String], candidate_skill_names: &[String]) -> f64 {
    let required: Vec<String> = normalize_names(required);
    let candidate: Vec<String> = normalize_names(candidate_skill_names);

    if required.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let matched = required
        .iter()
        .filter(|req| {
            candidate
                .iter()
                .any(|have| have.contains(req.as_str()) || req.contains(have.as_str()))
        })
        .count();

    round_one_decimal(matched as f64 / required.len() as f64 * 100.0)
}

fn normalize_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect()
}

#[inline]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
