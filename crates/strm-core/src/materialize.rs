//! Pointer-file materialization for one media entry.
//!
//! Planning ([`MaterializationJob::plan`]) is pure: it derives the target
//! location and URL. Execution creates the directory and writes the file
//! through a temp file in the same directory, renamed into place.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::GenerateConfig;
use crate::error::MaterializeError;
use crate::path_model::{build_url, relative_dir, sanitize_stem, trim_path_by_keyword};
use crate::scheduler::{JobOutcome, SkipReason};
use crate::tree::MediaEntry;

/// Where one pointer file goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationJob {
    pub target_dir: PathBuf,
    pub output_path: PathBuf,
    pub url: String,
}

/// Mode for pointer files, readable by a media server running as another user.
#[cfg(unix)]
const POINTER_FILE_MODE: u32 = 0o644;

/// Temp files start owner-only; widen before they are renamed into place.
#[cfg(unix)]
fn set_pointer_permissions(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(POINTER_FILE_MODE))
}

#[cfg(not(unix))]
fn set_pointer_permissions(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}

/// Joins `relative` onto `root` one segment at a time; empty, `.` and `..`
/// segments are dropped so the result stays under `root`.
fn mirrored_dir(root: &Path, relative: &str) -> PathBuf {
    relative
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
}

impl MaterializationJob {
    /// Derives the job for `entry`, or the reason it must be skipped.
    pub fn plan(entry: &MediaEntry, cfg: &GenerateConfig) -> Result<Self, SkipReason> {
        let stem = sanitize_stem(&entry.name).ok_or(SkipReason::EmptyName)?;
        let trimmed = trim_path_by_keyword(&entry.full_path, cfg.keyword());
        let target_dir = mirrored_dir(&cfg.output_dir, relative_dir(&trimmed));
        let output_path = target_dir.join(format!("{}{}", stem, cfg.output_extension));
        let url = build_url(cfg.prefix(), &trimmed, cfg.encode_url);
        Ok(Self {
            target_dir,
            output_path,
            url,
        })
    }

    /// Creates the target directory (idempotent) and writes `<url>\n`,
    /// replacing any existing file.
    pub fn execute(&self) -> Result<(), MaterializeError> {
        std::fs::create_dir_all(&self.target_dir).map_err(|source| MaterializeError::CreateDir {
            path: self.target_dir.clone(),
            source,
        })?;

        let write_err = |source: std::io::Error| MaterializeError::Write {
            path: self.output_path.clone(),
            source,
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&self.target_dir).map_err(write_err)?;
        tmp.write_all(self.url.as_bytes()).map_err(write_err)?;
        tmp.write_all(b"\n").map_err(write_err)?;
        set_pointer_permissions(tmp.as_file()).map_err(write_err)?;
        tmp.persist(&self.output_path)
            .map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// Plans and executes the job for `entry`, folding every result into an outcome.
pub fn materialize(entry: &MediaEntry, cfg: &GenerateConfig) -> JobOutcome {
    let job = match MaterializationJob::plan(entry, cfg) {
        Ok(job) => job,
        Err(reason) => {
            tracing::debug!(path = %entry.full_path, %reason, "skipped");
            return JobOutcome::Skipped { reason };
        }
    };
    match job.execute() {
        Ok(()) => {
            tracing::debug!(path = %job.output_path.display(), url = %job.url, "pointer written");
            JobOutcome::Written {
                path: job.output_path,
                url: job.url,
            }
        }
        Err(e) => {
            tracing::warn!(path = %entry.full_path, "pointer write failed: {}", e);
            JobOutcome::Failed {
                message: e.to_string(),
            }
        }
    }
}
