// src/pipeline.rs
//! Sequential corpus orchestration: per-document analysis folded into
//! the aggregate graph, then finalization and export.
//!
//! Strictly single-threaded: `GraphStats` is mutated in place and has
//! no concurrent-writer story. If parallelism ever becomes worth it,
//! workers must accumulate private partials merged by per-key summation
//! before finalization.

use crate::analytics::seniority_distribution;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::export::{save_cosmograph_files, save_universe};
use crate::extract::extract_skills;
use crate::graph::{filter_edges, finalize_nodes, GraphStats};
use crate::ingest::{load_documents, Document};
use crate::keywords::SeniorityKeywords;
use crate::seniority::{detect_seniority, SeniorityResult};
use crate::taxonomy::{SkillId, TaxonomyIndex};
use crate::title::TitleClassifier;
use crate::universe::Universe;
use std::collections::BTreeSet;

/// Per-document observation: the skill set and the seniority verdict.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub skills: BTreeSet<SkillId>,
    pub seniority: SeniorityResult,
}

/// Counts reported back to the caller after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub nodes: usize,
    pub edges: usize,
    /// Document counts per level, indexed by `Level::index`.
    pub level_counts: [usize; 4],
}

/// Analyzes one posting. An explicit title on the document bypasses
/// the classifier; otherwise the most likely title line is detected
/// heuristically.
#[must_use]
pub fn analyze_document(
    document: &Document,
    index: &TaxonomyIndex,
    keywords: &SeniorityKeywords,
    classifier: &TitleClassifier,
    search_window: usize,
) -> DocumentAnalysis {
    let title = match &document.title {
        Some(explicit) => explicit.clone(),
        None => classifier.extract_title_candidate(&document.text, search_window),
    };

    let seniority = detect_seniority(&title, &document.text, keywords);
    let skills = extract_skills(&document.text, index);

    DocumentAnalysis { skills, seniority }
}

/// Folds a corpus into a finalized `Universe`. Pure with respect to its
/// inputs: the same documents, taxonomy and keywords always produce the
/// same output.
#[must_use]
pub fn build_universe(
    documents: &[Document],
    index: &TaxonomyIndex,
    keywords: &SeniorityKeywords,
    threshold: u32,
    search_window: usize,
) -> (Universe, RunSummary) {
    let classifier = TitleClassifier::new(keywords);
    let mut stats = GraphStats::new(index.skill_count());

    for (i, document) in documents.iter().enumerate() {
        let analysis = analyze_document(document, index, keywords, &classifier, search_window);
        stats.update(&analysis.skills, analysis.seniority.level);

        if (i + 1) % 100 == 0 {
            tracing::info!("processed {}/{} documents", i + 1, documents.len());
        }
    }

    let (nodes, active, seniority_scores) = finalize_nodes(&stats, index, threshold);
    let links = filter_edges(&stats, &active, index, threshold);
    let meta = seniority_distribution(&seniority_scores, nodes.len());

    let summary = RunSummary {
        documents: documents.len(),
        nodes: nodes.len(),
        edges: links.len(),
        level_counts: stats.level_counts(),
    };

    (Universe { meta, nodes, links }, summary)
}

/// Runs the full pipeline from configuration: load, aggregate,
/// finalize, export. Returns `None` when the corpus is empty (a valid
/// if useless state, reported as a warning, not an error).
///
/// # Errors
/// Returns an error when the corpus cannot be read or outputs cannot
/// be written. Taxonomy/keyword problems degrade instead of failing.
pub fn run(config: &PipelineConfig) -> Result<Option<RunSummary>> {
    tracing::info!("loading corpus from {}", config.input.display());
    let documents = load_documents(&config.input)?;
    if documents.is_empty() {
        tracing::warn!("no documents found in {}", config.input.display());
        return Ok(None);
    }
    tracing::info!("found {} documents", documents.len());

    let index = TaxonomyIndex::load(&config.taxonomy);
    if index.is_empty() {
        tracing::warn!("taxonomy is empty: no skills can be extracted");
    }

    let keywords = config
        .keywords
        .as_deref()
        .map_or_else(SeniorityKeywords::default, SeniorityKeywords::load);

    let (universe, summary) = build_universe(
        &documents,
        &index,
        &keywords,
        config.threshold,
        config.search_window,
    );

    save_universe(&universe, &config.output_dir)?;
    save_cosmograph_files(&universe, &config.output_dir)?;

    Ok(Some(summary))
}
