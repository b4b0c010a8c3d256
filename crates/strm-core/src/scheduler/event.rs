//! Per-job outcomes and the events that carry them to the caller.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why a job produced no file without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The sanitized file name was empty.
    EmptyName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyName => write!(f, "empty name"),
        }
    }
}

/// Result of one materialization job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobOutcome {
    Written { path: PathBuf, url: String },
    Skipped { reason: SkipReason },
    Failed { message: String },
}

/// One finished job, in completion order.
#[derive(Debug, Clone, Serialize)]
pub struct JobEvent {
    /// Position of the entry in the submitted list.
    pub index: usize,
    /// Reconstructed remote path of the entry.
    pub source: String,
    pub outcome: JobOutcome,
}

/// Human-readable status line, e.g. `[written] /out/a.strm -> http://host/a.mkv`.
impl fmt::Display for JobEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            JobOutcome::Written { path, url } => {
                write!(f, "[written] {} -> {}", path.display(), url)
            }
            JobOutcome::Skipped { reason } => write!(f, "[skipped] {}: {}", self.source, reason),
            JobOutcome::Failed { message } => write!(f, "[failed] {}: {}", self.source, message),
        }
    }
}
