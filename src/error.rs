// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillscopeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SkillscopeError>;

// Allow `?` on std::io::Error by converting to SkillscopeError::Io with unknown path.
impl From<std::io::Error> for SkillscopeError {
    fn from(source: std::io::Error) -> Self {
        SkillscopeError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for SkillscopeError {
    fn from(e: walkdir::Error) -> Self {
        SkillscopeError::Other(e.to_string())
    }
}
