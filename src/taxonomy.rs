// src/taxonomy.rs
//! The skill taxonomy index: canonical IDs, alias resolution, and the
//! longest-first term list that drives greedy extraction.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Raw taxonomy shape on disk: group -> canonical skill -> aliases.
///
/// `BTreeMap` keeps group and canonical iteration order stable so that
/// `SkillId` assignment is deterministic across runs.
pub type Taxonomy = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Dense integer handle for a canonical skill, assigned at taxonomy load.
///
/// All graph statistics are keyed by `SkillId` instead of strings; edge
/// keys become sorted `(SkillId, SkillId)` tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillId(pub u32);

impl SkillId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable lookup tables derived from the taxonomy, built once and
/// passed explicitly to extraction and aggregation. No hidden globals.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    /// Dense table: `SkillId` -> canonical skill ID (lower-cased).
    canonicals: Vec<String>,
    /// Dense table: `SkillId` -> group name.
    groups: Vec<String>,
    /// Any term (canonical or alias, lower-cased) -> canonical `SkillId`.
    alias_map: HashMap<String, SkillId>,
    /// All terms sorted by descending length, then lexically.
    /// Load-bearing: longer terms must be tested before their substrings.
    matchable_terms: Vec<String>,
}

/// Disk wrapper so the file can be either a bare taxonomy object or
/// `{ "taxonomy": { ... } }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TaxonomyFile {
    Wrapped { taxonomy: Taxonomy },
    Bare(Taxonomy),
}

impl TaxonomyIndex {
    /// Builds the index from an in-memory taxonomy.
    #[must_use]
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        let mut canonicals = Vec::new();
        let mut groups = Vec::new();
        let mut alias_map = HashMap::new();

        for (group, skills) in taxonomy {
            for (canonical, aliases) in skills {
                let norm_canonical = canonical.trim().to_lowercase();
                if norm_canonical.is_empty() {
                    tracing::warn!("skipping unnamed skill in group {group:?}");
                    continue;
                }
                let id = SkillId(u32::try_from(canonicals.len()).unwrap_or(u32::MAX));

                alias_map.insert(norm_canonical.clone(), id);
                for alias in aliases {
                    let norm_alias = alias.trim().to_lowercase();
                    if !norm_alias.is_empty() {
                        alias_map.insert(norm_alias, id);
                    }
                }

                canonicals.push(norm_canonical);
                groups.push(group.clone());
            }
        }

        let mut matchable_terms: Vec<String> = alias_map.keys().cloned().collect();
        matchable_terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            canonicals,
            groups,
            alias_map,
            matchable_terms,
        }
    }

    /// Loads the taxonomy JSON from disk.
    ///
    /// A missing or malformed file is a configuration defect, not a
    /// pipeline abort: it is logged and an empty index is returned, so
    /// the run degrades to "no skills extractable".
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("taxonomy file not found at {}: {e}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<TaxonomyFile>(&content) {
            Ok(TaxonomyFile::Wrapped { taxonomy }) | Ok(TaxonomyFile::Bare(taxonomy)) => {
                let index = Self::from_taxonomy(&taxonomy);
                tracing::debug!(
                    "taxonomy loaded: {} canonical skills, {} matchable terms",
                    index.skill_count(),
                    index.matchable_terms.len()
                );
                index
            }
            Err(e) => {
                tracing::error!("malformed taxonomy at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Number of canonical skills.
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.canonicals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonicals.is_empty()
    }

    /// Canonical skill ID for a dense handle.
    #[must_use]
    pub fn canonical(&self, id: SkillId) -> &str {
        self.canonicals.get(id.index()).map_or("", String::as_str)
    }

    /// Group for a dense handle.
    #[must_use]
    pub fn group(&self, id: SkillId) -> &str {
        self.groups.get(id.index()).map_or("Unknown", String::as_str)
    }

    /// Resolves any term (canonical or alias) to its canonical handle.
    /// Case-insensitive: the map is keyed lower-cased.
    #[must_use]
    pub fn resolve(&self, term: &str) -> Option<SkillId> {
        self.alias_map.get(term).copied()
    }

    /// Group for any term, via alias resolution.
    #[must_use]
    pub fn group_for_term(&self, term: &str) -> Option<&str> {
        self.resolve(&term.to_lowercase()).map(|id| self.group(id))
    }

    /// All matchable terms, longest-first then lexical.
    #[must_use]
    pub fn matchable_terms(&self) -> &[String] {
        &self.matchable_terms
    }

    /// All canonical skill IDs, in dense-handle order.
    #[must_use]
    pub fn all_skills(&self) -> &[String] {
        &self.canonicals
    }
}
