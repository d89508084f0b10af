//! Single-threaded execution strategy
//!
//! Runs every job in input order on the calling task, using the same
//! runner contract and statistics schema as the parallel strategy. With
//! no concurrent mutation to guard against, outcomes accumulate in a
//! locally owned snapshot list instead of a locked monitor.

use crate::config::ExecutionConfig;
use crate::error::{BatchError, BatchResult};
use crate::job::runner::JobRunner;
use crate::job::state::JobState;
use crate::job::JobDescription;
use crate::processor::{BatchContext, ErrorReporter, JobParameters, JobProcessor};
use crate::statistics::BatchStatistics;
use std::sync::Arc;
use tracing::debug;

/// Executes a batch one job at a time on the calling task.
#[derive(Debug, Clone)]
pub struct SequentialExecutor {
    config: ExecutionConfig,
}

impl SequentialExecutor {
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Run every job in input order, then return the batch statistics.
    ///
    /// A failure from `run_one_job` marks that job failed and the batch
    /// continues; a failure from either lifecycle hook aborts or taints
    /// the batch (see [`BatchError`]).
    pub async fn execute<P: JobProcessor>(
        &self,
        processor: Arc<P>,
        items: Vec<P::Item>,
        context: BatchContext,
        reporter: Arc<dyn ErrorReporter>,
    ) -> BatchResult<BatchStatistics> {
        let shared = Arc::new(
            processor
                .before_any_job(&context)
                .await
                .map_err(|source| BatchError::SetupFailed { source })?,
        );

        let total_items = items.len();
        debug!(total_items, "starting sequential batch");
        let runner = JobRunner::new(
            Arc::clone(&processor),
            reporter,
            self.config.log_ongoing_jobs(total_items),
        );

        let mut snapshots = Vec::with_capacity(total_items);
        for (position, item) in items.into_iter().enumerate() {
            let description =
                JobDescription::new(processor.descriptive_name(&item), (position + 1) as u64);
            let state = JobState::new();
            let params = JobParameters {
                shared: Arc::clone(&shared),
                item,
                description,
                suppress_errors: self.config.suppress_errors,
                context: context.clone(),
            };
            runner.run(&state, params).await;
            snapshots.push(state.snapshot());
        }

        let statistics = BatchStatistics::from_snapshots(snapshots);
        match processor.after_all_jobs(&shared, &context).await {
            Ok(()) => Ok(statistics),
            Err(source) => Err(BatchError::TeardownFailed { statistics, source }),
        }
    }
}
