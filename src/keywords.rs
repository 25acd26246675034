// src/keywords.rs
//! Seniority keyword configuration.
//!
//! The scoring weights and cutoffs in `seniority.rs` are empirically
//! tuned; the keyword lists they consume are data, not code. Defaults
//! ship in the binary and a JSON file can override them wholesale.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleKeywords {
    pub senior: Vec<String>,
    pub managerial: Vec<String>,
    pub junior: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeniorityKeywords {
    pub titles: TitleKeywords,
    /// Terms that mark a line as naming a role ("engineer", "manager").
    pub role_indicators: Vec<String>,
    pub action_verbs: Vec<String>,
    pub scope_keywords: Vec<String>,
    pub leadership_keywords: Vec<String>,
    pub nfr_keywords: Vec<String>,
    pub paradigm_keywords: Vec<String>,
}

fn vec_of(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for TitleKeywords {
    fn default() -> Self {
        Self {
            senior: vec_of(&["senior", "sr", "lead", "principal", "staff", "architect"]),
            managerial: vec_of(&["manager", "head", "director", "vp", "chief", "cto"]),
            junior: vec_of(&["junior", "jr", "entry", "associate", "intern", "trainee"]),
        }
    }
}

impl Default for SeniorityKeywords {
    fn default() -> Self {
        Self {
            titles: TitleKeywords::default(),
            role_indicators: vec_of(&[
                "engineer",
                "developer",
                "manager",
                "architect",
                "designer",
                "analyst",
                "scientist",
                "consultant",
                "administrator",
                "specialist",
                "lead",
            ]),
            action_verbs: vec_of(&[
                "architect",
                "design",
                "lead",
                "mentor",
                "optimize",
                "strategize",
                "audit",
                "oversee",
                "scale",
                "drive",
                "define",
                "innovate",
                "standardize",
                "champion",
                "modernize",
                "orchestrate",
                "refactor",
                "pioneer",
                "transform",
                "evangelize",
                "govern",
            ]),
            scope_keywords: vec_of(&[
                "distributed systems",
                "architecture",
                "microservices",
                "scalability",
                "high availability",
                "infrastructure",
                "security compliance",
                "legacy migration",
                "cross-functional",
                "cloud infrastructure",
                "system integration",
                "end-to-end",
                "enterprise-scale",
            ]),
            leadership_keywords: vec_of(&[
                "code review",
                "mentoring",
                "technical vision",
                "hiring",
                "onboarding",
                "stakeholder management",
                "roadmap",
                "standardization",
                "team lead",
                "technical leadership",
                "guiding",
                "facilitating",
            ]),
            nfr_keywords: vec_of(&[
                "observability",
                "monitoring",
                "throughput",
                "latency",
                "disaster recovery",
                "performance tuning",
                "cost optimization",
                "security audits",
                "reliability engineering",
                "fault tolerance",
                "capacity planning",
            ]),
            paradigm_keywords: vec_of(&[
                "design patterns",
                "solid principles",
                "event-driven architecture",
                "serverless",
                "cloud-native",
                "language agnostic",
                "functional programming",
                "object-oriented design",
                "tdd",
                "ci/cd pipeline",
                "infrastructure as code",
            ]),
        }
    }
}

impl SeniorityKeywords {
    /// Loads keyword lists from a JSON file, falling back to the tuned
    /// defaults (with a logged configuration error) when the file is
    /// missing or malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("keyword file not found at {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::error!("malformed keyword file at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Flattened title keywords across all three seniority tiers,
    /// used by the title phrase regex.
    #[must_use]
    pub fn all_title_keywords(&self) -> Vec<&str> {
        self.titles
            .senior
            .iter()
            .chain(self.titles.managerial.iter())
            .chain(self.titles.junior.iter())
            .map(String::as_str)
            .collect()
    }

    /// Words ignored by the title-density calculation: generic posting
    /// vocabulary that would otherwise dominate term frequency.
    #[must_use]
    pub fn stopwords() -> HashSet<&'static str> {
        [
            "role",
            "job",
            "title",
            "position",
            "senior",
            "staff",
            "engineer",
            "lead",
            "manager",
            "sr",
            "jr",
            "team",
            "meet",
            "description",
        ]
        .into_iter()
        .collect()
    }
}
