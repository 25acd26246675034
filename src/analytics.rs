// src/analytics.rs
//! Stateless derived-statistics computation for the meta block.

use crate::universe::Meta;
use std::collections::BTreeMap;

#[allow(clippy::cast_precision_loss)]
fn bucket_key(i: usize) -> String {
    format!("{:.1}-{:.1}", i as f64 / 10.0, (i + 1) as f64 / 10.0)
}

/// Buckets seniority scores into ten fixed-width bins over [0.0, 1.0).
///
/// A score of exactly 1.0 is clamped into the "0.9-1.0" bucket so every
/// valid score lands in exactly one bin and counts sum to the input
/// length.
#[must_use]
pub fn seniority_distribution(seniority_scores: &[f64], total_skills: usize) -> Meta {
    let mut distribution: BTreeMap<String, usize> =
        (0..10).map(|i| (bucket_key(i), 0)).collect();

    for &score in seniority_scores {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bucket_index = ((score * 10.0) as usize).min(9);
        if let Some(count) = distribution.get_mut(&bucket_key(bucket_index)) {
            *count += 1;
        }
    }

    Meta {
        seniority_distribution: distribution,
        total_skills,
    }
}
