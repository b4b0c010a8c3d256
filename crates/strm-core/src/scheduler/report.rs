//! Aggregate tally of a batch.

use serde::Serialize;

use super::event::{JobEvent, JobOutcome};

/// A job that failed, with the message retained for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedItem {
    pub index: usize,
    pub source: String,
    pub message: String,
}

/// Final counts for one batch.
///
/// `written + skipped + failed.len() == submitted` once the batch is done.
/// `cancelled` counts entries never dispatched because a stop was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub submitted: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: Vec<FailedItem>,
    pub cancelled: usize,
}

impl BatchReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, event: &JobEvent) {
        match &event.outcome {
            JobOutcome::Written { .. } => self.written += 1,
            JobOutcome::Skipped { .. } => self.skipped += 1,
            JobOutcome::Failed { message } => self.failed.push(FailedItem {
                index: event.index,
                source: event.source.clone(),
                message: message.clone(),
            }),
        }
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Number of jobs that have produced an outcome.
    pub fn finished(&self) -> usize {
        self.written + self.skipped + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.finished() == self.submitted
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
