//! Executes one job and records its outcome
//!
//! The runner is the failure boundary for job logic: whatever
//! `run_one_job` raises is caught here, reported through the error sink,
//! and recorded as a failed outcome. Nothing a job does (short of
//! panicking) escapes to the surrounding executor or its sibling jobs.

use crate::job::state::JobState;
use crate::processor::{ErrorReporter, JobParameters, JobProcessor};
use std::sync::Arc;
use tracing::info;

/// Shared machinery for running jobs against one processor.
pub(crate) struct JobRunner<P: JobProcessor> {
    processor: Arc<P>,
    reporter: Arc<dyn ErrorReporter>,
    log_progress: bool,
}

impl<P: JobProcessor> Clone for JobRunner<P> {
    fn clone(&self) -> Self {
        Self {
            processor: Arc::clone(&self.processor),
            reporter: Arc::clone(&self.reporter),
            log_progress: self.log_progress,
        }
    }
}

impl<P: JobProcessor> JobRunner<P> {
    pub fn new(processor: Arc<P>, reporter: Arc<dyn ErrorReporter>, log_progress: bool) -> Self {
        Self {
            processor,
            reporter,
            log_progress,
        }
    }

    /// Run one job to its terminal outcome, updating `state` along the way.
    pub async fn run(&self, state: &JobState, params: JobParameters<P::Shared, P::Item>) {
        let description = params.description.clone();

        state.mark_running();
        if self.log_progress {
            info!("{} started", description);
        }

        let success = match self.processor.run_one_job(params).await {
            Ok(success) => success,
            Err(error) => {
                self.reporter.record_error(&description.name, &error);
                false
            }
        };
        state.mark_finished(success);

        if self.log_progress {
            info!(
                "{} finished ({})",
                description,
                if success { "succeeded" } else { "failed" }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::state::JobOutcome;
    use crate::job::JobDescription;
    use crate::processor::BatchContext;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakyProcessor;

    #[async_trait]
    impl JobProcessor for FlakyProcessor {
        type Item = i32;
        type Shared = ();

        async fn before_any_job(&self, _context: &BatchContext) -> anyhow::Result<()> {
            Ok(())
        }

        async fn run_one_job(&self, params: JobParameters<(), i32>) -> anyhow::Result<bool> {
            match params.item {
                0 => Ok(true),
                1 => Ok(false),
                _ => anyhow::bail!("item {} exploded", params.item),
            }
        }

        async fn after_all_jobs(&self, _shared: &(), _context: &BatchContext) -> anyhow::Result<()> {
            Ok(())
        }

        fn descriptive_name(&self, item: &i32) -> String {
            format!("item-{}", item)
        }
    }

    #[derive(Default)]
    struct CountingReporter {
        calls: AtomicUsize,
    }

    impl ErrorReporter for CountingReporter {
        fn record_error(&self, _source: &str, _error: &anyhow::Error) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn params(item: i32) -> JobParameters<(), i32> {
        JobParameters {
            shared: Arc::new(()),
            item,
            description: JobDescription::new(format!("item-{}", item), 1),
            suppress_errors: false,
            context: BatchContext::default(),
        }
    }

    #[tokio::test]
    async fn test_successful_job_is_marked_succeeded() {
        let reporter = Arc::new(CountingReporter::default());
        let runner = JobRunner::new(Arc::new(FlakyProcessor), reporter.clone(), false);
        let state = JobState::new();

        runner.run(&state, params(0)).await;

        assert_eq!(state.snapshot().outcome, JobOutcome::Succeeded);
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_quiet_failure_is_not_reported() {
        let reporter = Arc::new(CountingReporter::default());
        let runner = JobRunner::new(Arc::new(FlakyProcessor), reporter.clone(), false);
        let state = JobState::new();

        runner.run(&state, params(1)).await;

        assert_eq!(state.snapshot().outcome, JobOutcome::Failed);
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_raised_failure_is_reported_and_recorded() {
        let reporter = Arc::new(CountingReporter::default());
        let runner = JobRunner::new(Arc::new(FlakyProcessor), reporter.clone(), false);
        let state = JobState::new();

        runner.run(&state, params(2)).await;

        let snapshot = state.snapshot();
        assert_eq!(snapshot.outcome, JobOutcome::Failed);
        assert!(snapshot.finished_at.is_some());
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 1);
    }
}
