//! Error types shared by the core.
//!
//! Parse-level and configuration problems are fatal for a run; per-entry
//! materialization problems are carried inside job outcomes instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid run configuration. Detected before any job is scheduled.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input tree file path is empty")]
    MissingInput,
    #[error("input tree file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("URL prefix is empty")]
    MissingUrlPrefix,
    #[error("output directory is empty")]
    MissingOutputDir,
}

/// Filesystem failure while materializing one pointer file.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
