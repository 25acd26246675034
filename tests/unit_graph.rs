// tests/unit_graph.rs
use skillscope_core::analytics::seniority_distribution;
use skillscope_core::graph::{filter_edges, finalize_nodes, GraphStats};
use skillscope_core::seniority::Level;
use skillscope_core::taxonomy::{SkillId, Taxonomy, TaxonomyIndex};
use std::collections::{BTreeMap, BTreeSet};

fn test_index() -> TaxonomyIndex {
    let mut infra = BTreeMap::new();
    infra.insert("aws".to_string(), vec![]);
    infra.insert("docker".to_string(), vec![]);
    infra.insert("kubernetes".to_string(), vec!["k8s".to_string()]);
    infra.insert("terraform".to_string(), vec![]);

    let mut taxonomy = Taxonomy::new();
    taxonomy.insert("Infra".to_string(), infra);
    TaxonomyIndex::from_taxonomy(&taxonomy)
}

fn skills(index: &TaxonomyIndex, names: &[&str]) -> BTreeSet<SkillId> {
    names.iter().filter_map(|n| index.resolve(n)).collect()
}

#[test]
fn test_clique_completeness() {
    let index = test_index();
    let mut stats = GraphStats::new(index.skill_count());

    // Three skills must produce exactly the three unordered pairs.
    stats.update(&skills(&index, &["aws", "docker", "kubernetes"]), Level::Mid);

    assert_eq!(stats.edges().len(), 3);
    for counters in stats.edges().values() {
        assert_eq!(counters.total, 1);
    }
}

#[test]
fn test_referential_integrity_after_filtering() {
    let index = test_index();
    let mut stats = GraphStats::new(index.skill_count());

    stats.update(&skills(&index, &["aws", "docker"]), Level::Senior);
    stats.update(&skills(&index, &["aws", "docker"]), Level::Mid);
    stats.update(&skills(&index, &["aws", "terraform"]), Level::Mid);

    // terraform (total 1) falls below the threshold of 2.
    let (nodes, active, _) = finalize_nodes(&stats, &index, 2);
    let edges = filter_edges(&stats, &active, &index, 2);

    let retained: BTreeSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(!retained.contains("terraform"));
    for edge in &edges {
        assert!(retained.contains(edge.source.as_str()), "{}", edge.source);
        assert!(retained.contains(edge.target.as_str()), "{}", edge.target);
    }
    assert_eq!(edges.len(), 1);
}

#[test]
fn test_edge_below_threshold_dropped_despite_active_endpoints() {
    let index = test_index();
    let mut stats = GraphStats::new(index.skill_count());

    // Both nodes pass threshold 2 on their own, but the pair co-occurs
    // only once.
    stats.update(&skills(&index, &["aws", "docker"]), Level::Mid);
    stats.update(&skills(&index, &["aws"]), Level::Mid);
    stats.update(&skills(&index, &["docker"]), Level::Mid);

    let (_, active, _) = finalize_nodes(&stats, &index, 2);
    assert_eq!(active.len(), 2);

    let edges = filter_edges(&stats, &active, &index, 2);
    assert!(edges.is_empty());
}

#[test]
fn test_node_scores_round_to_two_decimals() {
    let index = test_index();
    let mut stats = GraphStats::new(index.skill_count());

    stats.update(&skills(&index, &["aws"]), Level::Senior);
    stats.update(&skills(&index, &["aws"]), Level::Junior);
    stats.update(&skills(&index, &["aws"]), Level::Junior);

    let (nodes, _, _) = finalize_nodes(&stats, &index, 1);
    let aws = nodes.iter().find(|n| n.id == "aws").expect("aws retained");
    assert_eq!(aws.seniority_score, 0.33);
    assert!(!aws.is_senior);
}

#[test]
fn test_histogram_closure_over_node_scores() {
    let index = test_index();
    let mut stats = GraphStats::new(index.skill_count());

    stats.update(&skills(&index, &["aws", "docker"]), Level::Senior);
    stats.update(&skills(&index, &["aws", "kubernetes"]), Level::Junior);
    stats.update(&skills(&index, &["terraform"]), Level::Managerial);

    let (nodes, _, scores) = finalize_nodes(&stats, &index, 1);
    let meta = seniority_distribution(&scores, nodes.len());

    let bucketed: usize = meta.seniority_distribution.values().sum();
    assert_eq!(bucketed, scores.len());
    assert_eq!(meta.total_skills, nodes.len());
}
