pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod graph;
pub mod ingest;
pub mod keywords;
pub mod pipeline;
pub mod seniority;
pub mod taxonomy;
pub mod title;
pub mod universe;
