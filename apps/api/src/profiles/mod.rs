// Skill profile persistence: stores each user's submitted skills and latest analysis.

pub mod handlers;
pub mod store;
