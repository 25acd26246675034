// src/ingest.rs
//! Corpus loading: a delimiter-separated dump file or a directory of
//! one-posting-per-file text documents.

use crate::error::{Result, SkillscopeError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Marker separating postings inside a single dump file.
pub const DOCUMENT_DELIMITER: &str = "###END###";

/// One job posting: an opaque text blob plus an optional explicit
/// title. When the title is absent the pipeline runs the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: Option<String>,
    pub text: String,
}

impl Document {
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
        }
    }
}

/// Loads the corpus from `path`: a directory is walked for `.txt`/`.md`
/// files (one document each, sorted for determinism); anything else is
/// read as a single delimiter-separated dump.
///
/// A missing path is reported as a warning and yields an empty corpus,
/// which the pipeline treats as a valid early-stop state, not a crash.
///
/// # Errors
/// Returns an I/O error when an existing path is unreadable.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    if !path.exists() {
        tracing::warn!("corpus not found at {}", path.display());
        return Ok(Vec::new());
    }
    if path.is_dir() {
        load_directory(path)
    } else {
        load_delimited_file(path)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SkillscopeError::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn load_delimited_file(path: &Path) -> Result<Vec<Document>> {
    let content = read_file(path)?;
    let documents: Vec<Document> = content
        .split(DOCUMENT_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(Document::from_text)
        .collect();

    tracing::debug!(
        "loaded {} documents from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

fn is_document_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("txt" | "md")
    )
}

fn load_directory(dir: &Path) -> Result<Vec<Document>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() && is_document_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();

    let mut documents = Vec::with_capacity(files.len());
    for file in &files {
        let content = read_file(file)?;
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            documents.push(Document::from_text(trimmed));
        }
    }

    tracing::debug!(
        "loaded {} documents from directory {}",
        documents.len(),
        dir.display()
    );
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn delimited_file_splits_and_drops_empties() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "first posting\n###END###\n\n###END###second posting###END###"
        )
        .expect("write");

        let docs = load_documents(file.path()).expect("load");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].text, "first posting");
        assert_eq!(docs[1].text, "second posting");
    }

    #[test]
    fn directory_loads_txt_files_in_sorted_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("b.txt"), "second").expect("write");
        fs::write(dir.path().join("a.txt"), "first").expect("write");
        fs::write(dir.path().join("skip.json"), "{}").expect("write");

        let docs = load_documents(dir.path()).expect("load");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].text, "first");
        assert_eq!(docs[1].text, "second");
    }

    #[test]
    fn missing_path_yields_empty_corpus() {
        let docs = load_documents(Path::new("no/such/corpus.txt")).expect("non-fatal");
        assert!(docs.is_empty());
    }
}
