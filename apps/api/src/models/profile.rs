use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillProfileRow {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    /// Normalized skill name → proficiency, as submitted.
    pub proficiency: Value,
    pub skill_score: i32,
    /// Full `AnalysisResult` blob.
    pub analysis: Value,
    pub updated_at: DateTime<Utc>,
}
