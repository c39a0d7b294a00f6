//! Profile store — pluggable persistence for skill profiles.
//!
//! Default: `PgProfileStore` (PostgreSQL, `skill_profiles` table).
//! `AppState` holds an `Arc<dyn ProfileStore>` so handlers never touch SQL directly.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::SkillProfileRow;
use crate::skills::analyzer::AnalysisResult;
use crate::skills::score::ProficiencyMap;

/// Everything written for one skill profile save.
pub struct SaveProfileParams<'a> {
    pub user_id: Uuid,
    pub skills: &'a [String],
    pub proficiency: &'a ProficiencyMap,
    pub analysis: &'a AnalysisResult,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: Uuid) -> Result<Option<SkillProfileRow>, AppError>;

    /// Inserts or replaces the user's skill profile and returns the stored row.
    async fn save(&self, params: SaveProfileParams<'_>) -> Result<SkillProfileRow, AppError>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<SkillProfileRow>, AppError> {
        let row: Option<SkillProfileRow> =
            sqlx::query_as("SELECT * FROM skill_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn save(&self, params: SaveProfileParams<'_>) -> Result<SkillProfileRow, AppError> {
        let row = build_row(&params);

        let stored: SkillProfileRow = sqlx::query_as(
            r#"
            INSERT INTO skill_profiles
                (user_id, skills, proficiency, skill_score, analysis, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                skills = EXCLUDED.skills,
                proficiency = EXCLUDED.proficiency,
                skill_score = EXCLUDED.skill_score,
                analysis = EXCLUDED.analysis,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(row.user_id)
        .bind(&row.skills)
        .bind(&row.proficiency)
        .bind(row.skill_score)
        .bind(&row.analysis)
        .bind(row.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}

/// Builds the row to persist, stamped with the current time.
pub fn build_row(params: &SaveProfileParams<'_>) -> SkillProfileRow {
    SkillProfileRow {
        user_id: params.user_id,
        skills: params.skills.to_vec(),
        proficiency: json!(params.proficiency),
        skill_score: params.analysis.score,
        analysis: json!(params.analysis),
        updated_at: Utc::now(),
    }
}
