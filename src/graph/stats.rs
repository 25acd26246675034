// src/graph/stats.rs
//! Running per-skill and per-pair statistics across the corpus.

use crate::seniority::Level;
use crate::taxonomy::SkillId;
use std::collections::{BTreeMap, BTreeSet};

/// The three counters tracked for every node and every edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Documents containing the skill (or pair).
    pub total: u32,
    /// Of those, documents classified Senior or Managerial.
    pub senior_count: u32,
    /// Of those, documents classified Managerial.
    pub managerial_count: u32,
}

impl Counters {
    fn bump(&mut self, level: Level) {
        self.total += 1;
        if level.is_senior() {
            self.senior_count += 1;
        }
        if level == Level::Managerial {
            self.managerial_count += 1;
        }
    }
}

/// Mutable aggregate state for one corpus run.
///
/// Nodes are a dense table indexed by `SkillId` and exist (zeroed) for
/// every canonical skill from initialization. Edges are created lazily
/// on first co-occurrence, keyed by the sorted ID pair so (A, B) and
/// (B, A) are the same edge. Single-writer by design: no interior
/// mutability, no concurrent update path.
#[derive(Debug, Clone, Default)]
pub struct GraphStats {
    nodes: Vec<Counters>,
    edges: BTreeMap<(SkillId, SkillId), Counters>,
    level_counts: [usize; 4],
}

impl GraphStats {
    /// Zero-initialized stats for `skill_count` canonical skills.
    #[must_use]
    pub fn new(skill_count: usize) -> Self {
        Self {
            nodes: vec![Counters::default(); skill_count],
            edges: BTreeMap::new(),
            level_counts: [0; 4],
        }
    }

    /// Folds one document's observations into the running totals.
    ///
    /// Every found skill bumps its node counters; every unordered pair
    /// among the found skills bumps an edge, forming a complete clique:
    /// a document with k skills contributes k*(k-1)/2 edge increments.
    pub fn update(&mut self, found: &BTreeSet<SkillId>, level: Level) {
        self.level_counts[level.index()] += 1;

        for &id in found {
            if let Some(node) = self.nodes.get_mut(id.index()) {
                node.bump(level);
            }
        }

        if found.len() < 2 {
            return;
        }

        // BTreeSet iteration is sorted, so a < b holds for every pair
        // and the edge key is canonical without re-sorting.
        let ids: Vec<SkillId> = found.iter().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                self.edges.entry((a, b)).or_default().bump(level);
            }
        }
    }

    #[must_use]
    pub fn node(&self, id: SkillId) -> Option<&Counters> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn nodes(&self) -> &[Counters] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &BTreeMap<(SkillId, SkillId), Counters> {
        &self.edges
    }

    /// Document counts per level, indexed by `Level::index`.
    #[must_use]
    pub fn level_counts(&self) -> [usize; 4] {
        self.level_counts
    }
}
