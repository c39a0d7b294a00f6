//! Score Calculator — weighted skill coverage plus an industry-diversity bonus.
//!
//! Algorithm:
//! 1. For each matched skill: total += demand × proficiency / 10, max += 10
//! 2. base = round(total / max × 100)
//! 3. score = min(100, base + min(industries × 2, 20))
//!
//! Unmatched skills contribute nothing. Duplicates in the input count once per occurrence.

use std::collections::{BTreeSet, HashMap};

use crate::skills::registry::lookup_skill;

/// Proficiency assumed for a skill the caller did not rate.
pub const DEFAULT_PROFICIENCY: i32 = 5;

/// Caller-asserted proficiency per normalized skill name, nominally 1 – 10.
/// Values are not validated here.
pub type ProficiencyMap = HashMap<String, i32>;

/// Best possible contribution of one skill (demand 10, proficiency 10).
const MAX_CONTRIBUTION: f64 = 10.0;
const DIVERSITY_POINTS_PER_INDUSTRY: i64 = 2;
const DIVERSITY_BONUS_CAP: i64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct RawScore {
    pub total_score: f64,
    pub max_possible_score: f64,
    pub matched_count: usize,
    pub industries: BTreeSet<&'static str>,
}

/// Proficiency for `skill`, falling back to [`DEFAULT_PROFICIENCY`] when unrated.
pub fn proficiency_for(proficiency: &ProficiencyMap, skill: &str) -> i32 {
    proficiency
        .get(skill)
        .copied()
        .unwrap_or(DEFAULT_PROFICIENCY)
}

pub fn compute_raw_score(normalized_skills: &[String], proficiency: &ProficiencyMap) -> RawScore {
    let mut raw = RawScore {
        total_score: 0.0,
        max_possible_score: 0.0,
        matched_count: 0,
        industries: BTreeSet::new(),
    };

    for skill in normalized_skills {
        let Some(record) = lookup_skill(skill) else {
            continue;
        };

        let level = proficiency_for(proficiency, skill);
        raw.total_score += f64::from(record.demand) * f64::from(level) / 10.0;
        raw.max_possible_score += MAX_CONTRIBUTION;
        raw.matched_count += 1;
        raw.industries.extend(record.industries.iter().copied());
    }

    raw
}

/// Normalizes a raw score to 0 – 100 for in-range proficiencies.
///
/// Only valid when `raw.matched_count > 0`; the analyzer short-circuits before
/// calling this on zero matches.
pub fn normalize_score(raw: &RawScore) -> i32 {
    debug_assert!(raw.max_possible_score > 0.0);

    // f64::round is half-away-from-zero, i.e. half-up for the non-negative range
    let base = (raw.total_score / raw.max_possible_score * 100.0).round() as i64;
    let bonus = (raw.industries.len() as i64 * DIVERSITY_POINTS_PER_INDUSTRY).min(DIVERSITY_BONUS_CAP);

    // out-of-range proficiency can push the sum far below i32; saturate instead of wrapping
    base.saturating_add(bonus).clamp(i64::from(i32::MIN), 100) as i32
}
