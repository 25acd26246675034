// src/title.rs
//! Job-title candidate detection.
//!
//! Postings either label the role explicitly ("Role: Web Designer") or
//! bury it in a heading near the top or bottom of the document. Two
//! independent strategies run over the same text and a density check
//! resolves disagreements; a single strategy misses too many cases.

use crate::keywords::SeniorityKeywords;
use regex::Regex;

/// Lines that label the role explicitly.
const EXPLICIT_PREFIXES: [&str; 4] = ["role:", "job title:", "title:", "position:"];

/// How many characters of the document the phrase regex inspects.
const PHRASE_SCAN_LIMIT: usize = 2000;

/// Title detector with the phrase regex compiled once per keyword set.
#[derive(Debug, Clone)]
pub struct TitleClassifier {
    role_indicators: Vec<String>,
    phrase_re: Option<Regex>,
}

impl TitleClassifier {
    /// Builds the classifier, precompiling the embedded-phrase regex
    /// from the configured seniority keywords and role indicators.
    #[must_use]
    pub fn new(keywords: &SeniorityKeywords) -> Self {
        Self {
            role_indicators: keywords.role_indicators.clone(),
            phrase_re: build_phrase_regex(keywords),
        }
    }

    /// Heuristically locates the most likely job-title line or phrase.
    /// Returns an empty string for empty input; callers score that as
    /// a zero title contribution.
    #[must_use]
    pub fn extract_title_candidate(&self, text: &str, search_window: usize) -> String {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(&first_line) = lines.first() else {
            return String::new();
        };

        let total_lines = lines.len();
        let mut explicit_candidate = String::new();
        let mut best_heuristic_line = first_line.to_string();
        let mut best_heuristic_score = -1.0_f64;

        for (i, line) in lines.iter().enumerate() {
            let line_lower = line.to_lowercase();

            // Explicit check runs on every line; first hit wins.
            if explicit_candidate.is_empty() {
                if let Some(candidate) = match_explicit_prefix(line, &line_lower) {
                    explicit_candidate = candidate;
                }
            }

            // Heuristic check runs only inside the leading/trailing window.
            let is_top = i < search_window;
            let is_bottom = i >= total_lines.saturating_sub(search_window);
            if !is_top && !is_bottom {
                continue;
            }

            let word_count = line.split_whitespace().count();
            if !(2..=8).contains(&word_count) {
                continue;
            }

            // Leading lines decay with depth; trailing lines get a flat
            // score that still beats arbitrary mid-document text.
            #[allow(clippy::cast_precision_loss)]
            let position_score = if is_top { 1.0 / (i as f64 + 1.0) } else { 0.5 };

            let keyword_matches = self
                .role_indicators
                .iter()
                .filter(|ind| line_lower.contains(ind.as_str()))
                .count();

            #[allow(clippy::cast_precision_loss)]
            let score = position_score + keyword_matches as f64 * 2.0;
            if score > best_heuristic_score {
                best_heuristic_score = score;
                best_heuristic_line = (*line).to_string();
            }
        }

        // An embedded "Senior Engineer III"-style phrase near the start
        // of the document supersedes the plain heuristic line.
        let mut heuristic_candidate = best_heuristic_line;
        if let Some(re) = &self.phrase_re {
            if let Some(m) = re.find(char_safe_prefix(text, PHRASE_SCAN_LIMIT)) {
                heuristic_candidate = m.as_str().trim().to_string();
                tracing::debug!("phrase regex candidate: {heuristic_candidate:?}");
            }
        }

        if explicit_candidate.is_empty() {
            return heuristic_candidate;
        }

        self.resolve_conflict(&explicit_candidate, &heuristic_candidate, text)
    }

    /// Picks between an explicit label and a heuristic heading.
    fn resolve_conflict(&self, explicit: &str, heuristic: &str, text: &str) -> String {
        let h_lower = heuristic.to_lowercase();
        let e_lower = explicit.to_lowercase();

        // A heuristic candidate with no role vocabulary at all is noise.
        let has_role_kw = self
            .role_indicators
            .iter()
            .any(|ind| h_lower.contains(ind.as_str()));
        if !has_role_kw {
            return explicit.to_string();
        }

        // "Data Scientist III" beats an explicit "Data Scientist": the
        // superset is more specific, as long as it is not padded out.
        if h_lower.contains(&e_lower) && h_lower.len() < e_lower.len() + 10 {
            return heuristic.to_string();
        }

        let text_lower = text.to_lowercase();
        let explicit_density = title_density(explicit, &text_lower);
        let heuristic_density = title_density(heuristic, &text_lower);
        tracing::debug!(
            "title density: explicit {explicit:?}={explicit_density:.2} \
             heuristic {heuristic:?}={heuristic_density:.2}"
        );

        if heuristic_density > explicit_density {
            heuristic.to_string()
        } else {
            explicit.to_string()
        }
    }
}

fn match_explicit_prefix(line: &str, line_lower: &str) -> Option<String> {
    for prefix in EXPLICIT_PREFIXES {
        if line_lower.starts_with(prefix) {
            let candidate = line.get(prefix.len()..).unwrap_or("").trim().to_string();
            let words = candidate.split_whitespace().count();
            // Single-word remainders are usually section headers; very
            // long ones are prose that happened to start with "Role:".
            if words > 1 && words < 10 {
                return Some(candidate);
            }
        }
    }
    None
}

/// How strongly a candidate title is supported by the body: term
/// frequency of its significant words, normalized by their count.
fn title_density(title: &str, text_lower: &str) -> f64 {
    let stopwords = SeniorityKeywords::stopwords();
    let words: Vec<String> = title
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| !stopwords.contains(w.as_str()) && w.len() > 2)
        .collect();

    if words.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let score: f64 = words
        .iter()
        .map(|w| text_lower.matches(w.as_str()).count() as f64)
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let normalized = score / words.len() as f64;
    normalized
}

/// Builds the "seniority keyword + short gap + role indicator +
/// optional numeral/roman suffix" phrase regex.
fn build_phrase_regex(keywords: &SeniorityKeywords) -> Option<Regex> {
    let indicators: Vec<String> = keywords
        .role_indicators
        .iter()
        .filter(|k| k.len() > 2)
        .map(|k| regex::escape(k))
        .collect();
    let seniority: Vec<String> = keywords
        .all_title_keywords()
        .iter()
        .map(|k| regex::escape(k))
        .collect();

    if indicators.is_empty() || seniority.is_empty() {
        return None;
    }

    let pattern = format!(
        r"(?i)\b({})\s+[\w\s]{{0,20}}\b({})(?:\s*[-:]?\s*)(?:I{{1,3}}|IV|V|VI|[1-9])?\b",
        seniority.join("|"),
        indicators.join("|"),
    );

    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("failed to compile title phrase regex: {e}");
            None
        }
    }
}

/// Largest prefix of `text` no longer than `limit` bytes that ends on
/// a char boundary.
fn char_safe_prefix(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
