// src/graph/finalize.rs
//! Threshold filtering and derived-score computation.

use crate::graph::stats::{Counters, GraphStats};
use crate::seniority::round2;
use crate::taxonomy::{SkillId, TaxonomyIndex};
use crate::universe::{EdgeRecord, NodeRecord};
use std::collections::BTreeSet;

/// A node is flagged senior when more than 60% of its mentions come
/// from Senior/Managerial postings.
const SENIOR_FLAG_CUTOFF: f64 = 0.6;
/// Managerial flag cutoff: more than 40% managerial mentions.
const MANAGERIAL_FLAG_CUTOFF: f64 = 0.4;

fn scores(counters: &Counters) -> (f64, f64) {
    // Callers only reach this behind the total >= threshold gate, and
    // threshold is at least 1, so the division is safe.
    let seniority = round2(f64::from(counters.senior_count) / f64::from(counters.total));
    let managerial = round2(f64::from(counters.managerial_count) / f64::from(counters.total));
    (seniority, managerial)
}

/// Retains skills with `total >= threshold` and computes their derived
/// scores. Returns the node records, the surviving ID set (needed for
/// edge filtering), and the flat list of seniority scores consumed by
/// the distribution summarizer.
#[must_use]
pub fn finalize_nodes(
    stats: &GraphStats,
    index: &TaxonomyIndex,
    threshold: u32,
) -> (Vec<NodeRecord>, BTreeSet<SkillId>, Vec<f64>) {
    let threshold = threshold.max(1);
    let mut records = Vec::new();
    let mut active: BTreeSet<SkillId> = BTreeSet::new();
    let mut seniority_scores = Vec::new();

    for (i, counters) in stats.nodes().iter().enumerate() {
        if counters.total < threshold {
            continue;
        }
        let id = SkillId(u32::try_from(i).unwrap_or(u32::MAX));
        let (seniority_score, managerial_score) = scores(counters);

        active.insert(id);
        seniority_scores.push(seniority_score);
        records.push(NodeRecord {
            id: index.canonical(id).to_string(),
            group: index.group(id).to_string(),
            val: counters.total,
            seniority_score,
            managerial_score,
            is_senior: seniority_score > SENIOR_FLAG_CUTOFF,
            is_managerial: managerial_score > MANAGERIAL_FLAG_CUTOFF,
        });
    }

    (records, active, seniority_scores)
}

/// Retains edges whose own total meets the threshold AND whose both
/// endpoints survived node filtering. Referential integrity is
/// mandatory: no edge may reference a pruned node.
#[must_use]
pub fn filter_edges(
    stats: &GraphStats,
    active: &BTreeSet<SkillId>,
    index: &TaxonomyIndex,
    threshold: u32,
) -> Vec<EdgeRecord> {
    let threshold = threshold.max(1);
    let mut records = Vec::new();

    for (&(source, target), counters) in stats.edges() {
        if counters.total < threshold || !active.contains(&source) || !active.contains(&target) {
            continue;
        }
        let (seniority_score, managerial_score) = scores(counters);
        records.push(EdgeRecord {
            source: index.canonical(source).to_string(),
            target: index.canonical(target).to_string(),
            value: counters.total,
            seniority_score,
            managerial_score,
            is_senior: seniority_score > SENIOR_FLAG_CUTOFF,
            is_managerial: managerial_score > MANAGERIAL_FLAG_CUTOFF,
        });
    }

    records
}
