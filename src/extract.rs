// src/extract.rs
//! Greedy longest-match term extraction with progressive masking.
//!
//! Terms are tested longest-first (see `TaxonomyIndex::matchable_terms`)
//! so "machine learning engineer" consumes its span before "machine
//! learning" gets a chance to fire inside it. A matched span is masked
//! with a same-length run of `@` rather than removed: offsets stay
//! intact and adjacent words can never fuse into a new false match.

use crate::taxonomy::{SkillId, TaxonomyIndex};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").unwrap_or_else(|_| panic!("Invalid Regex")));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Normalizes raw posting text for matching: lower-case, URLs stripped
/// (link text is a rich source of false positives), whitespace runs
/// collapsed to single spaces.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_urls = URL_RE.replace_all(&lowered, "");
    WHITESPACE_RE.replace_all(&no_urls, " ").into_owned()
}

/// A character counts as "word" when it would glue two tokens together.
/// Deliberately NOT a regex `\b`: skill terms like `c++`, `c#` and
/// `.net` end or start on symbols that `\b` misclassifies.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Finds every occurrence of `term` in `hay` whose neighboring
/// characters (if any) are non-word on both sides. Start of string and
/// end of string count as boundaries.
fn boundary_matches(hay: &str, term: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    // An empty term matches at every position without consuming input.
    let Some(first) = term.chars().next() else {
        return ranges;
    };
    let step = first.len_utf8();
    let mut from = 0;

    while let Some(offset) = hay.get(from..).and_then(|tail| tail.find(term)) {
        let start = from + offset;
        let end = start + term.len();

        let before_ok = hay[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = hay[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));

        if before_ok && after_ok {
            ranges.push((start, end));
            from = end;
        } else {
            from = start + step;
        }
    }

    ranges
}

/// Masks every boundary-respecting occurrence of `term` in `work`,
/// returning false if none existed. The replacement is one `@` per
/// byte of the matched span, so every later term sees unchanged
/// offsets in the rest of the document.
fn mask_occurrences(work: &mut String, term: &str) -> bool {
    let ranges = boundary_matches(work, term);
    if ranges.is_empty() {
        return false;
    }

    let mut masked = String::with_capacity(work.len());
    let mut cursor = 0;
    for &(start, end) in &ranges {
        masked.push_str(&work[cursor..start]);
        for _ in start..end {
            masked.push('@');
        }
        cursor = end;
    }
    masked.push_str(&work[cursor..]);
    *work = masked;
    true
}

/// Scans `text` for every known skill term and returns the canonical
/// IDs present. A document either contains a skill or it does not, so
/// the result is a set.
#[must_use]
pub fn extract_skills(text: &str, index: &TaxonomyIndex) -> BTreeSet<SkillId> {
    let mut found: BTreeSet<SkillId> = BTreeSet::new();
    let mut work = clean_text(text);

    for term in index.matchable_terms() {
        // Cheap short-circuit before the boundary scan.
        if !work.contains(term.as_str()) {
            continue;
        }

        if mask_occurrences(&mut work, term) {
            if let Some(id) = index.resolve(term) {
                found.insert(id);
            }
        }
    }

    tracing::debug!("extracted {} unique skills", found.len());
    found
}
