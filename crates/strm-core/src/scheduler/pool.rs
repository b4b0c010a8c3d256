//! Bounded worker pool over the materializer.
//!
//! Keeps up to `workers` jobs in flight; when one finishes, the next entry
//! in submission order is dispatched until the list is exhausted. The
//! coordinator loop is the only writer of the report.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{Id, JoinSet};

use crate::config::GenerateConfig;
use crate::control::StopToken;
use crate::materialize::materialize;
use crate::tree::MediaEntry;

use super::event::{JobEvent, JobOutcome};
use super::report::BatchReport;

/// Work done per entry inside the pool.
type JobFn = fn(&MediaEntry, &GenerateConfig) -> JobOutcome;

/// Materializes every entry with at most `cfg.worker_count()` jobs in flight.
///
/// Each finished job is sent on `events` (if given) as soon as it completes.
/// Once `stop` is requested no further jobs are dispatched; the rest are
/// counted as cancelled. Never fails as a whole.
pub async fn run_batch(
    entries: Vec<MediaEntry>,
    cfg: Arc<GenerateConfig>,
    events: Option<mpsc::Sender<JobEvent>>,
    stop: Option<StopToken>,
) -> BatchReport {
    run_batch_with(entries, cfg, events, stop, materialize).await
}

async fn run_batch_with(
    entries: Vec<MediaEntry>,
    cfg: Arc<GenerateConfig>,
    events: Option<mpsc::Sender<JobEvent>>,
    stop: Option<StopToken>,
    job: JobFn,
) -> BatchReport {
    let max_in_flight = cfg.worker_count();
    let mut report = BatchReport::new(entries.len());
    let mut pending = entries.into_iter().enumerate();
    let mut join_set = JoinSet::new();
    // Task id -> (index, source), so a panicked job still reports its entry.
    let mut in_flight: HashMap<Id, (usize, String)> = HashMap::new();
    let is_stopped = || stop.as_ref().is_some_and(StopToken::is_stop_requested);

    tracing::info!(
        total = report.total,
        workers = max_in_flight,
        "starting pointer generation"
    );

    loop {
        while join_set.len() < max_in_flight && !is_stopped() {
            let Some((index, entry)) = pending.next() else {
                break;
            };
            let source = entry.full_path.clone();
            let cfg = Arc::clone(&cfg);
            let handle = join_set.spawn_blocking(move || {
                let outcome = job(&entry, &cfg);
                JobEvent {
                    index,
                    source: entry.full_path,
                    outcome,
                }
            });
            in_flight.insert(handle.id(), (index, source));
            report.submitted += 1;
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let event = match res {
            Ok(event) => {
                in_flight.retain(|_, (index, _)| *index != event.index);
                event
            }
            Err(e) => {
                let (index, source) = in_flight.remove(&e.id()).unwrap_or_default();
                tracing::warn!(path = %source, "pointer job join: {}", e);
                let message = if e.is_panic() {
                    "job panicked".to_string()
                } else {
                    format!("job task join: {}", e)
                };
                JobEvent {
                    index,
                    source,
                    outcome: JobOutcome::Failed { message },
                }
            }
        };
        report.record(&event);
        if let Some(tx) = &events {
            // A dropped receiver only means nobody is watching progress.
            let _ = tx.send(event).await;
        }
    }

    report.cancelled = report.total - report.submitted;
    if report.cancelled > 0 {
        tracing::info!(cancelled = report.cancelled, "stop requested; remaining entries not dispatched");
    }
    tracing::info!(
        submitted = report.submitted,
        written = report.written,
        skipped = report.skipped,
        failed = report.failed_count(),
        "pointer generation finished"
    );
    report
}
