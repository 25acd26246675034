// src/seniority.rs
//! Heuristic multi-factor seniority scoring.
//!
//! Each factor contributes a capped weight; the caps and cutoffs are
//! empirically tuned constants validated against labeled postings, not
//! derived quantities.

use crate::keywords::SeniorityKeywords;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Discrete seniority classification of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Junior,
    Mid,
    Senior,
    Managerial,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Junior, Level::Mid, Level::Senior, Level::Managerial];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Junior => "Junior",
            Level::Mid => "Mid",
            Level::Senior => "Senior",
            Level::Managerial => "Managerial",
        }
    }

    /// Senior and Managerial postings both count toward senior stats.
    #[must_use]
    pub fn is_senior(self) -> bool {
        matches!(self, Level::Senior | Level::Managerial)
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Level::Junior => 0,
            Level::Mid => 1,
            Level::Senior => 2,
            Level::Managerial => 3,
        }
    }
}

/// Pure function of (title, description): no persisted state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeniorityResult {
    pub score: f64,
    pub level: Level,
    pub is_senior: bool,
}

const SENIOR_CUTOFF: f64 = 9.0;
const MID_CUTOFF: f64 = 5.0;

// "5+ years", "8 years", "12 yrs": anything from five up.
static SENIOR_EXP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(5\+|[5-9]|1[0-9])\s*(years|yrs|year)").unwrap_or_else(|_| panic!("Invalid Regex"))
});
// "3 years" / "4 years" marks a mid-level expectation.
static MID_EXP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(3|4)\s*(years|yrs|year)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Rounds to two decimal places, matching the output contract for
/// scores.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Title factor (max 5.0). Managerial keywords dominate senior ones;
/// a title with no junior marker still earns a neutral 2.5 because
/// most postings omit seniority from the title entirely.
fn title_score(title_lower: &str, keywords: &SeniorityKeywords) -> (f64, bool) {
    let has = |list: &[String]| list.iter().any(|w| title_lower.contains(w.as_str()));

    let has_managerial = has(&keywords.titles.managerial);
    let has_senior = has(&keywords.titles.senior);
    let has_junior = has(&keywords.titles.junior);

    let score = if has_managerial {
        5.0
    } else if has_senior {
        4.0
    } else if !has_junior {
        2.5
    } else {
        0.0
    };

    (score, has_managerial)
}

/// Years-of-experience factor (max 5.0).
fn experience_score(desc_lower: &str) -> f64 {
    if SENIOR_EXP_RE.is_match(desc_lower) {
        5.0
    } else if MID_EXP_RE.is_match(desc_lower) {
        2.5
    } else {
        0.0
    }
}

/// Generic capped keyword factor: `weight` per distinct hit.
fn keyword_score(text_lower: &str, list: &[String], weight: f64, cap: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let hits = list
        .iter()
        .filter(|w| text_lower.contains(w.as_str()))
        .count() as f64;
    (hits * weight).min(cap)
}

/// Computes the weighted seniority score and level for one posting.
///
/// An empty title simply contributes the neutral no-junior-marker
/// title score; an empty description contributes nothing beyond it.
#[must_use]
pub fn detect_seniority(
    title: &str,
    description: &str,
    keywords: &SeniorityKeywords,
) -> SeniorityResult {
    let title_lower = title.to_lowercase();
    let desc_lower = description.to_lowercase();

    let (title_pts, has_managerial_title) = title_score(&title_lower, keywords);
    let experience_pts = experience_score(&desc_lower);
    let verb_pts = keyword_score(&desc_lower, &keywords.action_verbs, 0.4, 2.0);
    let scope_pts = keyword_score(&desc_lower, &keywords.scope_keywords, 0.5, 1.5);
    let leadership_pts = keyword_score(&desc_lower, &keywords.leadership_keywords, 0.5, 1.5);
    let nfr_pts = keyword_score(&desc_lower, &keywords.nfr_keywords, 0.5, 1.0);
    let paradigm_pts = keyword_score(&desc_lower, &keywords.paradigm_keywords, 0.5, 1.0);

    let total =
        title_pts + experience_pts + verb_pts + scope_pts + leadership_pts + nfr_pts + paradigm_pts;

    let level = if has_managerial_title {
        Level::Managerial
    } else if total >= SENIOR_CUTOFF {
        Level::Senior
    } else if total >= MID_CUTOFF {
        Level::Mid
    } else {
        Level::Junior
    };

    tracing::debug!(
        "seniority for {title:?}: score={total:.2} level={}",
        level.as_str()
    );

    SeniorityResult {
        score: round2(total),
        level,
        is_senior: level.is_senior(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managerial_title_overrides_score() {
        let kw = SeniorityKeywords::default();
        let result = detect_seniority("Engineering Manager", "", &kw);
        assert_eq!(result.level, Level::Managerial);
        assert!(result.is_senior);
    }

    #[test]
    fn experience_regex_tiers() {
        assert_eq!(experience_score("8 years of experience"), 5.0);
        assert_eq!(experience_score("5+ yrs required"), 5.0);
        assert_eq!(experience_score("3 years minimum"), 2.5);
        assert_eq!(experience_score("fresh graduates welcome"), 0.0);
    }

    #[test]
    fn keyword_score_caps() {
        let list: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let text = "alpha beta gamma delta epsilon zeta";
        assert_eq!(keyword_score(text, &list, 0.4, 2.0), 2.0);
    }

    #[test]
    fn neutral_title_scores_half_way() {
        let kw = SeniorityKeywords::default();
        let (pts, managerial) = title_score("software developer", &kw);
        assert_eq!(pts, 2.5);
        assert!(!managerial);
    }
}
