// src/export.rs
//! Output sinks: `universe.json` for the application, plus flat CSVs
//! for graph-exploration tools (Cosmograph-style `id,group,val` /
//! `source,target,value`).

use crate::error::{Result, SkillscopeError};
use crate::universe::Universe;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| SkillscopeError::Io {
        source,
        path: path.to_path_buf(),
    })
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline;
/// inner quotes are doubled per RFC 4180.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|source| SkillscopeError::Io {
        source,
        path: output_dir.to_path_buf(),
    })
}

/// Serializes the universe to `<output_dir>/universe.json` (pretty,
/// stable field order) and returns the written path.
///
/// # Errors
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save_universe(universe: &Universe, output_dir: &Path) -> Result<PathBuf> {
    ensure_output_dir(output_dir)?;

    let path = output_dir.join("universe.json");
    let json = serde_json::to_string_pretty(universe)?;
    write_file(&path, &json)?;

    tracing::info!("wrote {}", path.display());
    Ok(path)
}

/// Writes `nodes.csv` and `edges.csv` for the retained graph.
///
/// # Errors
/// Returns an error if the directory cannot be created or a file
/// cannot be written.
pub fn save_cosmograph_files(universe: &Universe, output_dir: &Path) -> Result<()> {
    ensure_output_dir(output_dir)?;

    let mut nodes_csv = String::from("id,group,val\n");
    for node in &universe.nodes {
        let _ = writeln!(
            nodes_csv,
            "{},{},{}",
            csv_field(&node.id),
            csv_field(&node.group),
            node.val
        );
    }
    let nodes_path = output_dir.join("nodes.csv");
    write_file(&nodes_path, &nodes_csv)?;
    tracing::info!("wrote {}", nodes_path.display());

    let mut edges_csv = String::from("source,target,value\n");
    for edge in &universe.links {
        let _ = writeln!(
            edges_csv,
            "{},{},{}",
            csv_field(&edge.source),
            csv_field(&edge.target),
            edge.value
        );
    }
    let edges_path = output_dir.join("edges.csv");
    write_file(&edges_path, &edges_csv)?;
    tracing::info!("wrote {}", edges_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::{EdgeRecord, Meta, NodeRecord};

    fn sample_universe() -> Universe {
        Universe {
            meta: Meta::default(),
            nodes: vec![NodeRecord {
                id: "python".to_string(),
                group: "Languages".to_string(),
                val: 4,
                seniority_score: 0.5,
                managerial_score: 0.25,
                is_senior: false,
                is_managerial: false,
            }],
            links: vec![EdgeRecord {
                source: "python".to_string(),
                target: "sql".to_string(),
                value: 2,
                seniority_score: 0.5,
                managerial_score: 0.0,
                is_senior: false,
                is_managerial: false,
            }],
        }
    }

    #[test]
    fn universe_json_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let universe = sample_universe();

        let path = save_universe(&universe, dir.path()).expect("save");
        let content = fs::read_to_string(path).expect("read back");
        let parsed: Universe = serde_json::from_str(&content).expect("parse");
        assert_eq!(parsed, universe);
    }

    #[test]
    fn csv_files_have_headers_and_rows() {
        let dir = tempfile::tempdir().expect("temp dir");
        save_cosmograph_files(&sample_universe(), dir.path()).expect("save");

        let nodes = fs::read_to_string(dir.path().join("nodes.csv")).expect("nodes");
        assert!(nodes.starts_with("id,group,val\n"));
        assert!(nodes.contains("python,Languages,4"));

        let edges = fs::read_to_string(dir.path().join("edges.csv")).expect("edges");
        assert!(edges.starts_with("source,target,value\n"));
        assert!(edges.contains("python,sql,2"));
    }

    #[test]
    fn csv_quotes_fields_containing_delimiters() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("Data, Analytics"), "\"Data, Analytics\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");

        let dir = tempfile::tempdir().expect("temp dir");
        let mut universe = sample_universe();
        universe.nodes[0].group = "Data, Analytics & BI".to_string();
        save_cosmograph_files(&universe, dir.path()).expect("save");

        let nodes = fs::read_to_string(dir.path().join("nodes.csv")).expect("nodes");
        assert!(nodes.contains("python,\"Data, Analytics & BI\",4"));
    }
}
