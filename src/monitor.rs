//! Concurrent collection of submitted jobs
//!
//! The coordinating task appends one [`SubmittedJob`] per input item while
//! worker tasks mutate the referenced [`JobState`] objects. The monitor
//! never mutates job states itself; it only reads their snapshots when
//! asked for statistics.

use crate::job::state::JobState;
use crate::job::JobDescription;
use crate::statistics::BatchStatistics;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Back-reference pair held by the monitor for every submitted job.
/// Insertion order is submission order.
#[derive(Debug, Clone)]
pub struct SubmittedJob {
    pub description: JobDescription,
    pub state: Arc<JobState>,
}

/// Submission-ordered record of every job in one batch.
///
/// One monitor serves one batch; it is discarded after the final
/// statistics are extracted.
#[derive(Debug, Default)]
pub struct JobMonitor {
    jobs: RwLock<Vec<SubmittedJob>>,
}

impl JobMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted job. Called from the coordinating task only.
    pub async fn add(&self, job: SubmittedJob) {
        let mut jobs = self.jobs.write().await;
        jobs.push(job);
    }

    /// Number of jobs submitted so far.
    pub async fn job_count(&self) -> usize {
        let jobs = self.jobs.read().await;
        jobs.len()
    }

    /// Reduce the current state of every submitted job into statistics.
    ///
    /// Safe to call mid-flight; the result is only meaningful once every
    /// job has reached a terminal outcome.
    pub async fn snapshot_statistics(&self) -> BatchStatistics {
        let jobs = self.jobs.read().await;
        BatchStatistics::from_snapshots(jobs.iter().map(|job| job.state.snapshot()))
    }
}
