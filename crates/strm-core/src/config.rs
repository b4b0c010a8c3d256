//! Run configuration passed into the core as a plain value.
//!
//! Loading and saving user preferences is the host application's job; the
//! core only validates and normalizes what it is given.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default pointer-file suffix.
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".strm";

/// Default number of materialization jobs in flight at once.
pub const DEFAULT_WORKERS: usize = 10;

/// Everything one generation run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Source directory-tree text file.
    pub input_path: PathBuf,
    /// Base URL prepended to every trimmed path.
    pub url_prefix: String,
    /// Root of the mirrored pointer-file tree.
    pub output_dir: PathBuf,
    /// Declared minimum media size. Carried through, not enforced.
    #[serde(default)]
    pub min_size_mb: u64,
    /// Pointer-file suffix, e.g. ".strm".
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    /// Optional anchor substring that (re)starts path reconstruction.
    #[serde(default)]
    pub start_keyword: Option<String>,
    /// Percent-encode each path segment of the URL.
    #[serde(default = "default_encode_url")]
    pub encode_url: bool,
    /// Upper bound on simultaneous materialization jobs.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_output_extension() -> String {
    DEFAULT_OUTPUT_EXTENSION.to_string()
}

fn default_encode_url() -> bool {
    true
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl GenerateConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        url_prefix: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            url_prefix: url_prefix.into(),
            output_dir: output_dir.into(),
            min_size_mb: 0,
            output_extension: default_output_extension(),
            start_keyword: None,
            encode_url: true,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Anchor keyword with surrounding whitespace removed; `None` if blank.
    pub fn keyword(&self) -> Option<&str> {
        self.start_keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// URL prefix without trailing `/`.
    pub fn prefix(&self) -> &str {
        self.url_prefix.trim_end_matches('/')
    }

    pub fn worker_count(&self) -> usize {
        self.workers.max(1)
    }

    /// Checks the fields required before any job may be scheduled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingInput);
        }
        if !self.input_path.exists() {
            return Err(ConfigError::InputNotFound(self.input_path.clone()));
        }
        if self.prefix().is_empty() {
            return Err(ConfigError::MissingUrlPrefix);
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingOutputDir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_new() {
        let cfg = GenerateConfig::new("tree.txt", "http://host/d", "/out");
        assert_eq!(cfg.output_extension, ".strm");
        assert!(cfg.encode_url);
        assert_eq!(cfg.workers, 10);
        assert_eq!(cfg.min_size_mb, 0);
        assert!(cfg.keyword().is_none());
    }

    #[test]
    fn keyword_blank_is_absent() {
        let mut cfg = GenerateConfig::new("t", "http://h", "/o");
        cfg.start_keyword = Some("   ".to_string());
        assert!(cfg.keyword().is_none());
        cfg.start_keyword = Some("  Media ".to_string());
        assert_eq!(cfg.keyword(), Some("Media"));
    }

    #[test]
    fn prefix_trailing_slashes_removed() {
        let cfg = GenerateConfig::new("t", "http://host/d///", "/o");
        assert_eq!(cfg.prefix(), "http://host/d");
    }

    #[test]
    fn worker_count_at_least_one() {
        let mut cfg = GenerateConfig::new("t", "http://h", "/o");
        cfg.workers = 0;
        assert_eq!(cfg.worker_count(), 1);
    }

    #[test]
    fn validate_reports_first_problem() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tree.txt");
        std::fs::write(&input, "|-- a.mkv\n").unwrap();

        let cfg = GenerateConfig::new("", "http://h", "/o");
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingInput)));

        let cfg = GenerateConfig::new(dir.path().join("missing.txt"), "http://h", "/o");
        assert!(matches!(cfg.validate(), Err(ConfigError::InputNotFound(_))));

        let cfg = GenerateConfig::new(&input, "/", "/o");
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingUrlPrefix)));

        let cfg = GenerateConfig::new(&input, "http://h", "");
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingOutputDir)));

        let cfg = GenerateConfig::new(&input, "http://h", dir.path());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            input_path = "tree.txt"
            url_prefix = "http://host/d"
            output_dir = "/srv/strm"
            start_keyword = "Media"
        "#;
        let cfg: GenerateConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_extension, ".strm");
        assert!(cfg.encode_url);
        assert_eq!(cfg.workers, DEFAULT_WORKERS);
        assert_eq!(cfg.keyword(), Some("Media"));
    }
}
