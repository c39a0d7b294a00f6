//! Skill and career path registries.
//!
//! Both tables are hand-curated constants. Keys are normalized skill names
//! (lowercase, trimmed); callers normalize before lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Market characteristics of one known skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRecord {
    /// Relative hiring demand, 1 – 10.
    pub demand: u8,
    /// Non-empty. `"All"` marks a cross-industry skill.
    pub industries: &'static [&'static str],
}

/// A target role and the skills it asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub name: &'static str,
    pub primary_skills: &'static [&'static str],
    pub secondary_skills: &'static [&'static str],
}

/// Sentinel industry for skills that apply everywhere.
pub const ALL_INDUSTRIES: &str = "All";

const fn skill(demand: u8, industries: &'static [&'static str]) -> SkillRecord {
    SkillRecord { demand, industries }
}

const WEB: &str = "Web Development";
const SWE: &str = "Software Engineering";
const DATA: &str = "Data Science";
const ML: &str = "Machine Learning";
const BACKEND: &str = "Backend";
const FRONTEND: &str = "Frontend";
const MOBILE: &str = "Mobile";
const CLOUD: &str = "Cloud Computing";
const DEVOPS: &str = "DevOps";
const DESIGN: &str = "Design";
const SECURITY: &str = "Security";
const BUSINESS: &str = "Business";
const MARKETING: &str = "Marketing";

const SKILL_TABLE: &[(&str, SkillRecord)] = &[
    // Languages
    ("javascript", skill(9, &[WEB, SWE, FRONTEND, BACKEND])),
    ("typescript", skill(8, &[WEB, SWE, FRONTEND, BACKEND])),
    ("python", skill(10, &[DATA, ML, BACKEND, SWE])),
    ("java", skill(8, &[SWE, BACKEND, MOBILE])),
    ("c++", skill(7, &[SWE])),
    ("c#", skill(7, &[SWE, BACKEND])),
    ("go", skill(7, &[BACKEND, CLOUD])),
    ("rust", skill(6, &[SWE, BACKEND])),
    ("swift", skill(6, &[MOBILE])),
    ("kotlin", skill(6, &[MOBILE, BACKEND])),
    ("sql", skill(9, &[DATA, BACKEND])),
    ("html", skill(6, &[WEB, FRONTEND])),
    ("css", skill(6, &[WEB, FRONTEND])),
    // Frameworks
    ("react", skill(9, &[WEB, FRONTEND, MOBILE])),
    ("angular", skill(7, &[WEB, FRONTEND])),
    ("vue", skill(7, &[WEB, FRONTEND])),
    ("node.js", skill(8, &[WEB, BACKEND])),
    ("django", skill(6, &[WEB, BACKEND])),
    ("flask", skill(5, &[WEB, BACKEND])),
    ("spring", skill(6, &[BACKEND])),
    ("react native", skill(7, &[MOBILE])),
    ("flutter", skill(6, &[MOBILE])),
    ("graphql", skill(6, &[WEB, BACKEND])),
    // Data / ML
    ("machine learning", skill(9, &[ML, DATA])),
    ("data analysis", skill(8, &[DATA, BUSINESS])),
    ("tensorflow", skill(7, &[ML])),
    ("pytorch", skill(7, &[ML])),
    ("excel", skill(6, &[BUSINESS, DATA])),
    ("mongodb", skill(6, &[BACKEND])),
    ("postgresql", skill(7, &[BACKEND, DATA])),
    // Infrastructure
    ("aws", skill(9, &[CLOUD, DEVOPS])),
    ("azure", skill(8, &[CLOUD, DEVOPS])),
    ("docker", skill(8, &[DEVOPS, CLOUD])),
    ("kubernetes", skill(8, &[DEVOPS, CLOUD])),
    ("linux", skill(7, &[DEVOPS, SECURITY])),
    ("git", skill(7, &[ALL_INDUSTRIES])),
    ("cybersecurity", skill(9, &[SECURITY])),
    // Design
    ("figma", skill(6, &[DESIGN])),
    ("ui/ux design", skill(7, &[DESIGN, FRONTEND])),
    // Business and soft skills
    ("project management", skill(7, &[BUSINESS])),
    ("agile", skill(7, &[SWE, BUSINESS])),
    ("marketing", skill(6, &[MARKETING])),
    ("seo", skill(5, &[MARKETING, WEB])),
    ("communication", skill(8, &[ALL_INDUSTRIES])),
    ("teamwork", skill(7, &[ALL_INDUSTRIES])),
    ("problem solving", skill(8, &[ALL_INDUSTRIES])),
];

static SKILL_INDEX: Lazy<HashMap<&'static str, SkillRecord>> =
    Lazy::new(|| SKILL_TABLE.iter().copied().collect());

/// Career paths in registry order. Order is the tie-break for equal match scores.
const CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        name: "Frontend Developer",
        primary_skills: &["javascript", "html", "css", "react"],
        secondary_skills: &["typescript", "vue", "angular", "figma", "git"],
    },
    CareerPath {
        name: "Backend Developer",
        primary_skills: &["node.js", "python", "java", "sql"],
        secondary_skills: &["docker", "aws", "postgresql", "mongodb", "git", "go"],
    },
    CareerPath {
        name: "Full Stack Developer",
        primary_skills: &["javascript", "react", "node.js", "sql"],
        secondary_skills: &["typescript", "docker", "aws", "git", "mongodb"],
    },
    CareerPath {
        name: "Data Scientist",
        primary_skills: &["python", "machine learning", "data analysis", "sql"],
        secondary_skills: &["tensorflow", "pytorch", "excel", "r"],
    },
    CareerPath {
        name: "DevOps Engineer",
        primary_skills: &["docker", "kubernetes", "aws", "linux"],
        secondary_skills: &["azure", "git", "python", "go"],
    },
    CareerPath {
        name: "Mobile Developer",
        primary_skills: &["swift", "kotlin", "react native"],
        secondary_skills: &["flutter", "javascript", "git", "ui/ux design"],
    },
    CareerPath {
        name: "UI/UX Designer",
        primary_skills: &["figma", "ui/ux design", "html", "css"],
        secondary_skills: &["javascript", "communication"],
    },
    CareerPath {
        name: "Cybersecurity Analyst",
        primary_skills: &["cybersecurity", "linux", "python"],
        secondary_skills: &["aws", "sql", "communication"],
    },
    CareerPath {
        name: "Product Manager",
        primary_skills: &["project management", "agile", "communication"],
        secondary_skills: &["data analysis", "excel", "ui/ux design"],
    },
    CareerPath {
        name: "Digital Marketer",
        primary_skills: &["marketing", "seo", "communication"],
        secondary_skills: &["data analysis", "excel"],
    },
];

/// Looks up a normalized skill name. Absent skills are a normal outcome.
pub fn lookup_skill(name: &str) -> Option<&'static SkillRecord> {
    SKILL_INDEX.get(name)
}

/// All career paths, in registry order.
pub fn all_career_paths() -> &'static [CareerPath] {
    CAREER_PATHS
}

/// Lowercases and trims a raw skill name into registry key form.
pub fn normalize_skill_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}
