//! Career Recommendation Generator.
//!
//! Each career path is scored by weighted overlap with the candidate's skills:
//! match = round((2 × primary hits + secondary hits) / (2 × |primary| + |secondary|) × 100)
//!
//! Output order: up to three career lines, then at most one skill-gap line, then the
//! generic fallback lines only if nothing else was produced.

use crate::skills::registry::{all_career_paths, CareerPath};

const TOP_N: usize = 3;
/// Paths at or below this score are not worth mentioning.
const MIN_LISTED_SCORE: u32 = 30;
/// The top path must beat this before a skill-gap suggestion is offered.
const MIN_GAP_SCORE: u32 = 40;

pub const GENERIC_RECOMMENDATIONS: [&str; 2] = [
    "Consider specializing in a specific career path to strengthen your profile",
    "Add more skills to your profile to unlock tailored career recommendations",
];

/// A career path with its match percentage against a skill list.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerMatch {
    pub path: &'static CareerPath,
    pub match_score: u32,
}

/// Generates recommendation lines against the built-in career path registry.
pub fn recommend(normalized_skills: &[String]) -> Vec<String> {
    recommend_from(all_career_paths(), normalized_skills)
}

pub fn recommend_from(paths: &'static [CareerPath], normalized_skills: &[String]) -> Vec<String> {
    let ranked = rank_career_paths(paths, normalized_skills);
    let mut recommendations: Vec<String> = ranked
        .iter()
        .take(TOP_N)
        .filter(|m| m.match_score > MIN_LISTED_SCORE)
        .map(|m| format!("{} ({}% match)", m.path.name, m.match_score))
        .collect();

    if let Some(top) = ranked.first().filter(|m| m.match_score > MIN_GAP_SCORE) {
        let missing = missing_primary_skills(top.path, normalized_skills);
        if !missing.is_empty() {
            recommendations.push(format!(
                "To improve as a {}, consider learning: {}",
                top.path.name,
                missing.join(", ")
            ));
        }
    }

    if recommendations.is_empty() {
        recommendations.extend(GENERIC_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    }

    recommendations
}

/// Scores every path and sorts descending by match. The sort is stable, so equal
/// scores keep registry order.
pub fn rank_career_paths(
    paths: &'static [CareerPath],
    normalized_skills: &[String],
) -> Vec<CareerMatch> {
    let mut ranked: Vec<CareerMatch> = paths
        .iter()
        .map(|path| CareerMatch {
            path,
            match_score: match_score(path, normalized_skills),
        })
        .collect();
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

pub fn match_score(path: &CareerPath, normalized_skills: &[String]) -> u32 {
    let hits = |list: &[&str]| list.iter().filter(|s| contains(normalized_skills, s)).count();
    let primary_hits = hits(path.primary_skills);
    let secondary_hits = hits(path.secondary_skills);

    let weight = 2 * path.primary_skills.len() + path.secondary_skills.len();
    if weight == 0 {
        return 0;
    }
    let earned = 2 * primary_hits + secondary_hits;
    (earned as f64 / weight as f64 * 100.0).round() as u32
}

fn missing_primary_skills(path: &CareerPath, normalized_skills: &[String]) -> Vec<&'static str> {
    path.primary_skills
        .iter()
        .copied()
        .filter(|skill| !contains(normalized_skills, skill))
        .collect()
}

fn contains(normalized_skills: &[String], skill: &str) -> bool {
    normalized_skills.iter().any(|s| s == skill)
}
