// src/graph/mod.rs
//! Incremental co-occurrence graph construction and filtering.

pub mod finalize;
pub mod stats;

pub use self::finalize::{filter_edges, finalize_nodes};
pub use self::stats::{Counters, GraphStats};
