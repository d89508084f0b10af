//! Thread-safe record of one job's lifecycle
//!
//! Exactly one runner mutates a given `JobState`; the monitor reads it
//! concurrently. All reads go through [`JobState::snapshot`], which takes
//! the same lock as the writer so a reader never observes torn state
//! (e.g. a terminal outcome without its finish timestamp).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Lifecycle position of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobOutcome {
    /// Submitted but no worker has picked it up yet
    NotYetRun,
    /// A worker is currently executing it
    Running,
    /// Finished and considered successful
    Succeeded,
    /// Finished and considered failed
    Failed,
}

impl JobOutcome {
    /// Whether the job will not transition further.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobOutcome::Succeeded | JobOutcome::Failed)
    }
}

/// Consistent point-in-time view of one job's state.
///
/// Invariants: `finished_at` is set iff the outcome is terminal;
/// `started_at` is set iff the outcome is not `NotYetRun`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobSnapshot {
    pub outcome: JobOutcome,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl JobSnapshot {
    /// Wall-clock execution time in milliseconds, defined only for jobs
    /// that both started and finished.
    pub fn execution_time_ms(&self) -> Option<f64> {
        match (self.started_at, self.finished_at) {
            (Some(started), Some(finished)) => {
                Some((finished - started).num_milliseconds() as f64)
            }
            _ => None,
        }
    }
}

impl Default for JobSnapshot {
    fn default() -> Self {
        Self {
            outcome: JobOutcome::NotYetRun,
            started_at: None,
            finished_at: None,
        }
    }
}

/// Mutable lifecycle record for one job.
#[derive(Debug, Default)]
pub struct JobState {
    inner: Mutex<JobSnapshot>,
}

impl JobState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to `Running` and record the start timestamp.
    pub fn mark_running(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.outcome = JobOutcome::Running;
        inner.started_at = Some(Utc::now());
    }

    /// Transition to a terminal outcome and record the finish timestamp.
    pub fn mark_finished(&self, success: bool) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.outcome = if success {
            JobOutcome::Succeeded
        } else {
            JobOutcome::Failed
        };
        inner.finished_at = Some(Utc::now());
    }

    /// Consistent view of the current state.
    pub fn snapshot(&self) -> JobSnapshot {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = JobState::new();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.outcome, JobOutcome::NotYetRun);
        assert!(snapshot.started_at.is_none());
        assert!(snapshot.finished_at.is_none());
        assert!(snapshot.execution_time_ms().is_none());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let state = JobState::new();

        state.mark_running();
        let running = state.snapshot();
        assert_eq!(running.outcome, JobOutcome::Running);
        assert!(running.started_at.is_some());
        assert!(running.finished_at.is_none());

        state.mark_finished(true);
        let finished = state.snapshot();
        assert_eq!(finished.outcome, JobOutcome::Succeeded);
        assert!(finished.outcome.is_terminal());
        assert!(finished.finished_at.is_some());
        assert!(finished.execution_time_ms().is_some());
    }

    #[test]
    fn test_failed_outcome_is_terminal() {
        let state = JobState::new();
        state.mark_running();
        state.mark_finished(false);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.outcome, JobOutcome::Failed);
        assert!(snapshot.outcome.is_terminal());
    }

    #[test]
    fn test_running_is_not_terminal() {
        assert!(!JobOutcome::NotYetRun.is_terminal());
        assert!(!JobOutcome::Running.is_terminal());
    }
}
