// src/config.rs
//! Pipeline configuration: defaults, `skillscope.toml` overrides, and
//! the two tunable scalars (occurrence threshold, title search window).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "skillscope.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Corpus source: a delimiter-separated dump file or a directory.
    pub input: PathBuf,
    /// Grouped skill taxonomy JSON.
    pub taxonomy: PathBuf,
    /// Optional seniority keyword override file; tuned defaults apply
    /// when absent.
    pub keywords: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Minimum occurrences for a node or edge to survive filtering.
    pub threshold: u32,
    /// Leading/trailing line window inspected by the title classifier.
    pub search_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("raw_jds.txt"),
            taxonomy: PathBuf::from("taxonomy.json"),
            keywords: None,
            output_dir: PathBuf::from("output"),
            threshold: 1,
            search_window: 20,
        }
    }
}

impl PipelineConfig {
    /// Loads `skillscope.toml` from the working directory when present,
    /// falling back to defaults otherwise.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads configuration from a specific TOML file. A missing file is
    /// normal (defaults apply); a malformed one is logged and ignored.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::default().with_toml(&content, path)
    }

    fn with_toml(self, content: &str, path: &Path) -> Self {
        match toml::from_str::<PipelineConfig>(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("malformed config at {}: {e}", path.display());
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.threshold, 1);
        assert_eq!(config.search_window, 20);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "input = \"corpus/\"\nthreshold = 3\nsearch_window = 5\n"
        )
        .expect("write");

        let config = PipelineConfig::load_from(file.path());
        assert_eq!(config.input, PathBuf::from("corpus/"));
        assert_eq!(config.threshold, 3);
        assert_eq!(config.search_window, 5);
        // Untouched fields keep their defaults.
        assert_eq!(config.taxonomy, PathBuf::from("taxonomy.json"));
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "threshold = [not toml").expect("write");

        let config = PipelineConfig::load_from(file.path());
        assert_eq!(config.threshold, 1);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = PipelineConfig::load_from(Path::new("no/such/skillscope.toml"));
        assert_eq!(config.search_window, 20);
    }
}
