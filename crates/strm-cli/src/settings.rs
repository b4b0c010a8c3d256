//! Persisted user preferences (`~/.config/tree2strm/config.toml`).
//!
//! Every field has a default, so a partial or empty file is valid. Values
//! given on the command line take precedence over stored ones.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strm_core::config::{GenerateConfig, DEFAULT_OUTPUT_EXTENSION, DEFAULT_WORKERS};

/// Stored defaults for `tree2strm generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Last used directory-tree file.
    pub input_path: Option<PathBuf>,
    /// Base URL for pointer files, e.g. `http://alist.local:5244/d`.
    pub url_prefix: Option<String>,
    /// Root directory for generated pointer files.
    pub output_dir: Option<PathBuf>,
    /// Declared minimum media size in MB (not enforced).
    pub min_size_mb: u64,
    /// Pointer-file suffix.
    pub output_extension: String,
    /// Anchor keyword where path reconstruction starts.
    pub start_keyword: Option<String>,
    /// Percent-encode URL path segments.
    pub encode_url: bool,
    /// Maximum pointer files written concurrently.
    pub workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: None,
            url_prefix: None,
            output_dir: None,
            min_size_mb: 0,
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            start_keyword: None,
            encode_url: true,
            workers: DEFAULT_WORKERS,
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tree2strm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

impl Settings {
    /// Load settings from disk, creating a default file if none exists.
    pub fn load_or_init() -> Result<Self> {
        let path = settings_path()?;
        if !path.exists() {
            let settings = Settings::default();
            settings.save_to(&path)?;
            tracing::info!("created default config at {}", path.display());
            return Ok(settings);
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = settings_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self).context("serialize config")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }

    /// Snapshot of a run configuration, for saving after a successful run.
    pub fn from_config(cfg: &GenerateConfig) -> Self {
        Self {
            input_path: Some(cfg.input_path.clone()),
            url_prefix: Some(cfg.url_prefix.clone()),
            output_dir: Some(cfg.output_dir.clone()),
            min_size_mb: cfg.min_size_mb,
            output_extension: cfg.output_extension.clone(),
            start_keyword: cfg.start_keyword.clone(),
            encode_url: cfg.encode_url,
            workers: cfg.workers,
        }
    }
}
