use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::SkillProfileRow;
use crate::profiles::store::SaveProfileParams;
use crate::skills::analyzer::analyze_skill_set;
use crate::skills::handlers::validate_submission;
use crate::skills::score::ProficiencyMap;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SaveSkillsRequest {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    #[serde(default)]
    pub proficiency: ProficiencyMap,
}

/// GET /api/v1/profiles/skills
pub async fn handle_get_skill_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SkillProfileRow>, AppError> {
    let row = state
        .profiles
        .get(params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No skill profile for user {}", params.user_id))
        })?;
    Ok(Json(row))
}

/// PUT /api/v1/profiles/skills
/// Analyses the submitted skills and stores them with the result on the user's profile.
pub async fn handle_save_skill_profile(
    State(state): State<AppState>,
    Json(req): Json<SaveSkillsRequest>,
) -> Result<Json<SkillProfileRow>, AppError> {
    let proficiency = validate_submission(&req.skills, req.proficiency, state.config.max_skills)?;
    let analysis = analyze_skill_set(&req.skills, &proficiency);

    let row = state
        .profiles
        .save(SaveProfileParams {
            user_id: req.user_id,
            skills: &req.skills,
            proficiency: &proficiency,
            analysis: &analysis,
        })
        .await?;

    info!(
        user_id = %req.user_id,
        skill_score = row.skill_score,
        skills = req.skills.len(),
        "Skill profile saved"
    );
    Ok(Json(row))
}
