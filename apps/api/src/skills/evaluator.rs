//! Strength/Weakness Evaluator.
//!
//! strength: demand ≥ 8 and proficiency ≥ 7
//! weakness: demand ≥ 7 and proficiency ≤ 4
//!
//! The two checks run independently; a skill satisfying both would be listed in both.
//! With proficiency as a single integer that cannot happen.

use crate::skills::registry::lookup_skill;
use crate::skills::score::{proficiency_for, ProficiencyMap};

const STRENGTH_MIN_DEMAND: u8 = 8;
const STRENGTH_MIN_PROFICIENCY: i32 = 7;
const WEAKNESS_MIN_DEMAND: u8 = 7;
const WEAKNESS_MAX_PROFICIENCY: i32 = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Classifies matched skills. Each name appears at most once per list, in order of
/// first occurrence; unmatched skills are ignored.
pub fn classify(normalized_skills: &[String], proficiency: &ProficiencyMap) -> Classification {
    let mut out = Classification::default();

    for skill in normalized_skills {
        let Some(record) = lookup_skill(skill) else {
            continue;
        };
        let level = proficiency_for(proficiency, skill);

        if record.demand >= STRENGTH_MIN_DEMAND && level >= STRENGTH_MIN_PROFICIENCY {
            push_unique(&mut out.strengths, skill);
        }
        if record.demand >= WEAKNESS_MIN_DEMAND && level <= WEAKNESS_MAX_PROFICIENCY {
            push_unique(&mut out.weaknesses, skill);
        }
    }

    out
}

fn push_unique(list: &mut Vec<String>, skill: &str) {
    if !list.iter().any(|s| s == skill) {
        list.push(skill.to_string());
    }
}
