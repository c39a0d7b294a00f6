//! Skill analyzer — composes scoring, classification and career recommendations
//! into one [`AnalysisResult`].
//!
//! Pure and total: any skill list and any proficiency map produce a result.
//! Callers must supply proficiency in 1 – 10; out-of-range values are not validated
//! and flow straight into the arithmetic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::skills::evaluator::classify;
use crate::skills::recommend::recommend;
use crate::skills::registry::normalize_skill_name;
use crate::skills::score::{compute_raw_score, normalize_score, ProficiencyMap};

/// Score returned when none of the submitted skills are recognised.
pub const FALLBACK_SCORE: i32 = 30;

pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Add more technical skills to your profile to get a detailed analysis",
    "Consider learning in-demand skills such as JavaScript, Python or SQL",
    "Rate your proficiency in each skill for more accurate recommendations",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0 – 100 for in-range proficiencies.
    pub score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Career matches first, then at most one skill-gap line, then generic advice.
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// The fixed result for a skill set with no recognised skills.
    pub fn fallback() -> Self {
        Self {
            score: FALLBACK_SCORE,
            strengths: vec![],
            weaknesses: vec![],
            recommendations: FALLBACK_RECOMMENDATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

pub fn analyze_skill_set(skills: &[String], proficiency: &ProficiencyMap) -> AnalysisResult {
    let normalized: Vec<String> = skills.iter().map(|s| normalize_skill_name(s)).collect();

    let raw = compute_raw_score(&normalized, proficiency);
    if raw.matched_count == 0 {
        debug!(submitted = normalized.len(), "no recognised skills, returning fallback analysis");
        return AnalysisResult::fallback();
    }

    let score = normalize_score(&raw);
    let classification = classify(&normalized, proficiency);
    let recommendations = recommend(&normalized);

    debug!(
        submitted = normalized.len(),
        matched = raw.matched_count,
        industries = raw.industries.len(),
        score,
        "skill set analysed"
    );

    AnalysisResult {
        score,
        strengths: classification.strengths,
        weaknesses: classification.weaknesses,
        recommendations,
    }
}
