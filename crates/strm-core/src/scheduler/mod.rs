//! Fan-out scheduler for pointer-file jobs.
//!
//! Runs the materializer over every selected entry with a fixed upper bound
//! on jobs in flight, streams one event per finished job, and aggregates the
//! final tally in a single coordinator.

mod event;
mod pool;
mod report;

pub use event::{JobEvent, JobOutcome, SkipReason};
pub use pool::run_batch;
pub use report::{BatchReport, FailedItem};
