//! Aggregate statistics for one batch
//!
//! `BatchStatistics` is a derived, immutable snapshot: it is reduced from
//! the final state of every submitted job and never mutated afterward.
//! Reducing the same terminal job states twice yields identical values.

use crate::job::state::{JobOutcome, JobSnapshot};
use serde::{Deserialize, Serialize};

/// Counts and mean durations over every job scheduled in one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Number of jobs submitted
    pub total_scheduled: u64,
    /// Jobs that finished and were considered successful
    pub completed_success: u64,
    /// Jobs that finished and were considered failed
    pub completed_failed: u64,
    /// Jobs scheduled but never reaching a terminal outcome
    pub not_completed: u64,
    /// Mean execution time of successful jobs; `None` when none succeeded
    pub mean_success_ms: Option<f64>,
    /// Mean execution time of failed jobs; `None` when none failed.
    /// Jobs that never started have no duration and are excluded.
    pub mean_failed_ms: Option<f64>,
}

impl BatchStatistics {
    /// Reduce job snapshots into batch statistics.
    ///
    /// Classification uses each snapshot's outcome at the moment it was
    /// taken, so reducing mid-flight is safe but only meaningful once
    /// every job is terminal.
    pub fn from_snapshots<I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = JobSnapshot>,
    {
        let mut total_scheduled = 0u64;
        let mut completed_success = 0u64;
        let mut completed_failed = 0u64;
        let mut success_ms = 0.0f64;
        let mut failed_ms = 0.0f64;

        for snapshot in snapshots {
            total_scheduled += 1;
            match snapshot.outcome {
                JobOutcome::Succeeded => {
                    completed_success += 1;
                    if let Some(ms) = snapshot.execution_time_ms() {
                        success_ms += ms;
                    }
                }
                JobOutcome::Failed => {
                    completed_failed += 1;
                    if let Some(ms) = snapshot.execution_time_ms() {
                        failed_ms += ms;
                    }
                }
                JobOutcome::NotYetRun | JobOutcome::Running => {}
            }
        }

        Self {
            total_scheduled,
            completed_success,
            completed_failed,
            not_completed: total_scheduled - completed_success - completed_failed,
            mean_success_ms: mean(success_ms, completed_success),
            mean_failed_ms: mean(failed_ms, completed_failed),
        }
    }

    /// True iff every scheduled job finished successfully. Holds for an
    /// empty batch.
    pub fn all_successful(&self) -> bool {
        self.completed_failed == 0 && self.not_completed == 0
    }

    /// Count identity every batch must satisfy.
    pub fn verify_consistency(&self) -> bool {
        self.completed_success + self.completed_failed + self.not_completed == self.total_scheduled
    }
}

fn mean(total_ms: f64, count: u64) -> Option<f64> {
    if count > 0 {
        Some(total_ms / count as f64)
    } else {
        None
    }
}
