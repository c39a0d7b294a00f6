// Skill analysis engine: registries, scoring, strength/weakness classification and
// career recommendations. Everything here is synchronous and side-effect free.

pub mod analyzer;
pub mod evaluator;
pub mod handlers;
pub mod recommend;
pub mod registry;
pub mod score;
