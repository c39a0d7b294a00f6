use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::skills::analyzer::{analyze_skill_set, AnalysisResult};
use crate::skills::registry::{all_career_paths, normalize_skill_name, CareerPath};
use crate::skills::score::ProficiencyMap;
use crate::state::AppState;

const MIN_PROFICIENCY: i32 = 1;
const MAX_PROFICIENCY: i32 = 10;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub proficiency: ProficiencyMap,
}

/// POST /api/v1/skills/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let proficiency = validate_submission(&req.skills, req.proficiency, state.config.max_skills)?;
    Ok(Json(analyze_skill_set(&req.skills, &proficiency)))
}

/// GET /api/v1/skills/career-paths
pub async fn handle_career_paths() -> Json<&'static [CareerPath]> {
    Json(all_career_paths())
}

/// Checks a skill submission at the HTTP boundary and returns the proficiency map
/// with normalized keys. The analyzer itself accepts anything.
pub fn validate_submission(
    skills: &[String],
    proficiency: ProficiencyMap,
    max_skills: usize,
) -> Result<ProficiencyMap, AppError> {
    if skills.len() > max_skills {
        return Err(AppError::Validation(format!(
            "At most {max_skills} skills may be submitted, got {}",
            skills.len()
        )));
    }

    let mut normalized = ProficiencyMap::with_capacity(proficiency.len());
    for (skill, level) in proficiency {
        if !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&level) {
            return Err(AppError::Validation(format!(
                "Proficiency for '{skill}' must be between {MIN_PROFICIENCY} and {MAX_PROFICIENCY}, got {level}"
            )));
        }
        let key = normalize_skill_name(&skill);
        if normalized.insert(key, level).is_some() {
            return Err(AppError::Validation(format!(
                "Proficiency for '{skill}' is given more than once (keys are case-insensitive)"
            )));
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prof(pairs: &[(&str, i32)]) -> ProficiencyMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_validate_normalizes_keys() {
        let out = validate_submission(&[], prof(&[(" JavaScript", 8)]), 10).unwrap();
        assert_eq!(out.get("javascript"), Some(&8));
    }

    #[test]
    fn test_validate_rejects_keys_colliding_after_normalization() {
        for pairs in [
            &[("Python", 2), ("python", 9)][..],
            &[("python ", 9), ("python", 9)][..],
        ] {
            let err = validate_submission(&[], prof(pairs), 10).unwrap_err();
            assert!(matches!(err, AppError::Validation(msg) if msg.contains("more than once")));
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        for bad in [0, 11, -3] {
            let err = validate_submission(&[], prof(&[("python", bad)]), 10).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn test_validate_rejects_too_many_skills() {
        let skills = vec!["sql".to_string(); 3];
        let err = validate_submission(&skills, ProficiencyMap::new(), 2).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("At most 2")));
    }
}
