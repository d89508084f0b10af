//! Bounded worker-pool execution strategy
//!
//! One task is spawned per input item; a semaphore sized by the pool
//! policy bounds how many run at once. The coordinating task submits
//! everything (consuming each input item as it goes), then blocks once on
//! the drain by awaiting every spawned task. Job failures stay inside the
//! runner; the pool only ever sees completed tasks, so one job's failure
//! never disturbs its siblings.

use crate::config::ExecutionConfig;
use crate::error::{BatchError, BatchResult};
use crate::executor::pool;
use crate::job::runner::JobRunner;
use crate::job::state::JobState;
use crate::job::JobDescription;
use crate::monitor::{JobMonitor, SubmittedJob};
use crate::processor::{BatchContext, ErrorReporter, JobParameters, JobProcessor};
use crate::statistics::BatchStatistics;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Executes a batch on a bounded pool of concurrent tasks.
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    config: ExecutionConfig,
}

impl ParallelExecutor {
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Submit every job, wait for the pool to drain, then return the
    /// batch statistics.
    ///
    /// The before-hook runs on the calling task so shared-state
    /// construction is never itself subject to a race; the after-hook runs
    /// strictly after every job's terminal outcome.
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

        let workers = pool::worker_count(&self.config, pool::available_parallelism());
        let total_items = items.len();
        debug!(workers, total_items, "starting parallel batch");

        let semaphore = Arc::new(Semaphore::new(workers));
        let monitor = JobMonitor::new();
        let runner = JobRunner::new(
            Arc::clone(&processor),
            Arc::clone(&reporter),
            self.config.log_ongoing_jobs(total_items),
        );

        // Submit one task per item; `items` is consumed here so each input
        // drops as soon as its job completes rather than at batch end.
        let mut tasks = FuturesUnordered::new();
        for (position, item) in items.into_iter().enumerate() {
            let description =
                JobDescription::new(processor.descriptive_name(&item), (position + 1) as u64);
            let state = Arc::new(JobState::new());
            monitor
                .add(SubmittedJob {
                    description: description.clone(),
                    state: Arc::clone(&state),
                })
                .await;

            let params = JobParameters {
                shared: Arc::clone(&shared),
                item,
                description,
                suppress_errors: self.config.suppress_errors,
                context: context.clone(),
            };
            let semaphore = Arc::clone(&semaphore);
            let runner = runner.clone();
            tasks.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquire cannot fail.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("worker semaphore closed");
                runner.run(&state, params).await;
            }));
        }

        debug_assert_eq!(monitor.job_count().await, total_items);

        // Drain: block once until every submitted task has finished. A
        // panicked job task leaves its state non-terminal, which the
        // reduction counts under not_completed.
        while let Some(joined) = tasks.next().await {
            if let Err(join_error) = joined {
                warn!("job task panicked: {}", join_error);
                reporter.record_error("worker-pool", &anyhow::Error::new(join_error));
            }
        }

        let statistics = monitor.snapshot_statistics().await;
        match processor.after_all_jobs(&shared, &context).await {
            Ok(()) => Ok(statistics),
            Err(source) => Err(BatchError::TeardownFailed { statistics, source }),
        }
    }
}
