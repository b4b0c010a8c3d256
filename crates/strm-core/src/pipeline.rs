//! One generation run: validate → parse → select → schedule.
//!
//! Parse-level problems abort before anything is scheduled; per-entry
//! problems end up in the report.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::GenerateConfig;
use crate::control::StopToken;
use crate::error::ConfigError;
use crate::scheduler::{self, BatchReport, JobEvent};
use crate::selection::Selection;
use crate::tree::{self, MediaEntry};

/// Parses `lines` with the configured anchor keyword and applies `selection`.
pub fn collect_entries<I, S>(cfg: &GenerateConfig, lines: I, selection: &Selection) -> Vec<MediaEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = tree::parse_tree(lines, cfg.keyword());
    let found = parsed.len();
    let selected = selection.apply(parsed);
    tracing::debug!(found, selected = selected.len(), "media entries collected");
    selected
}

/// Runs a full generation over already-decoded tree `lines`.
///
/// Returns an empty report (not an error) when no media entry survives
/// selection.
pub async fn generate<I, S>(
    cfg: &GenerateConfig,
    lines: I,
    selection: &Selection,
    events: Option<mpsc::Sender<JobEvent>>,
    stop: Option<StopToken>,
) -> Result<BatchReport, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cfg.validate()?;
    tracing::debug!(
        input = %cfg.input_path.display(),
        output = %cfg.output_dir.display(),
        min_size_mb = cfg.min_size_mb,
        keyword = cfg.keyword().unwrap_or(""),
        encode_url = cfg.encode_url,
        "generation config"
    );

    let entries = collect_entries(cfg, lines, selection);
    if entries.is_empty() {
        tracing::info!("no matching media entries found");
        return Ok(BatchReport::default());
    }

    Ok(scheduler::run_batch(entries, Arc::new(cfg.clone()), events, stop).await)
}
