// src/universe.rs
//! The output data model consumed by external visualization tools.
//!
//! Field names are the wire contract (`seniorityScore`, `isSenior`,
//! ...) and must not drift; downstream renderers bind to them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A retained skill with raw occurrence count and derived scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: String,
    pub group: String,
    /// Total documents mentioning the skill.
    pub val: u32,
    pub seniority_score: f64,
    pub managerial_score: f64,
    pub is_senior: bool,
    pub is_managerial: bool,
}

/// A retained co-occurrence edge between two skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    /// Total documents mentioning both endpoints.
    pub value: u32,
    pub seniority_score: f64,
    pub managerial_score: f64,
    pub is_senior: bool,
    pub is_managerial: bool,
}

/// Reporting metadata: the seniority-score histogram plus the retained
/// skill count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Bucket label ("0.0-0.1" ... "0.9-1.0") -> node count.
    pub seniority_distribution: BTreeMap<String, usize>,
    pub total_skills: usize,
}

/// The complete aggregated output of one corpus run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub meta: Meta,
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<EdgeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_record_serializes_with_wire_field_names() {
        let node = NodeRecord {
            id: "rust".to_string(),
            group: "Languages".to_string(),
            val: 7,
            seniority_score: 0.71,
            managerial_score: 0.14,
            is_senior: true,
            is_managerial: false,
        };
        let json = serde_json::to_string(&node).expect("serializes");
        for field in [
            "\"id\"",
            "\"group\"",
            "\"val\"",
            "\"seniorityScore\"",
            "\"managerialScore\"",
            "\"isSenior\"",
            "\"isManagerial\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn edge_record_serializes_with_wire_field_names() {
        let edge = EdgeRecord {
            source: "rust".to_string(),
            target: "kubernetes".to_string(),
            value: 3,
            seniority_score: 0.33,
            managerial_score: 0.0,
            is_senior: false,
            is_managerial: false,
        };
        let json = serde_json::to_string(&edge).expect("serializes");
        assert!(json.contains("\"source\""));
        assert!(json.contains("\"target\""));
        assert!(json.contains("\"value\""));
    }

    #[test]
    fn meta_uses_camel_case_keys() {
        let json = serde_json::to_string(&Meta::default()).expect("serializes");
        assert!(json.contains("\"seniorityDistribution\""));
        assert!(json.contains("\"totalSkills\""));
    }
}
