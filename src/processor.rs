//! The job-logic collaborator contract
//!
//! The scheduler owns ordering, isolation, and aggregation; what a job
//! actually computes belongs to the host framework behind the
//! [`JobProcessor`] trait. The scheduler calls the lifecycle hooks exactly
//! once per batch and `run_one_job` exactly once per item.

use crate::job::JobDescription;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;

/// Opaque per-batch context handed unchanged to every lifecycle hook and
/// every job.
#[derive(Debug, Clone, Default)]
pub struct BatchContext {
    /// Identifier naming the batch in logs and error reports
    pub batch_id: String,
    /// Free-form values the host wants visible to its own job logic
    pub variables: HashMap<String, String>,
}

impl BatchContext {
    pub fn new(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            variables: HashMap::new(),
        }
    }
}

/// Everything one job execution receives. Built fresh per job, immutable
/// once built.
#[derive(Debug)]
pub struct JobParameters<S, T> {
    /// Shared state computed once per batch by `before_any_job`
    pub shared: Arc<S>,
    /// The input item this job was derived from
    pub item: T,
    /// Identity of this job within the batch
    pub description: JobDescription,
    /// Forwarded opaquely from configuration; never interpreted here
    pub suppress_errors: bool,
    /// The batch-wide context
    pub context: BatchContext,
}

/// Job semantics supplied by the surrounding framework.
///
/// `before_any_job` strictly precedes every job; `after_all_jobs` strictly
/// follows every job's terminal outcome. A failure from either hook aborts
/// or taints the whole batch, while a failure from `run_one_job` only
/// marks that one job failed.
#[async_trait]
pub trait JobProcessor: Send + Sync + 'static {
    /// One input item
    type Item: Send + 'static;
    /// State computed once per batch and visible to every job. The
    /// scheduler never mutates it; any interior mutability is the job
    /// logic's responsibility to synchronize.
    type Shared: Send + Sync + 'static;

    /// Called exactly once per batch, before any job starts.
    async fn before_any_job(&self, context: &BatchContext) -> anyhow::Result<Self::Shared>;

    /// Called exactly once per item. `Ok(true)` means the job succeeded;
    /// `Ok(false)` marks it failed without reporting an error; `Err` marks
    /// it failed and is reported through the error sink.
    async fn run_one_job(
        &self,
        params: JobParameters<Self::Shared, Self::Item>,
    ) -> anyhow::Result<bool>;

    /// Called exactly once per batch, after every job has reached a
    /// terminal outcome, even when every job failed.
    async fn after_all_jobs(
        &self,
        shared: &Self::Shared,
        context: &BatchContext,
    ) -> anyhow::Result<()>;

    /// Human-readable name for an item, used only for reporting. Not
    /// assumed unique.
    fn descriptive_name(&self, item: &Self::Item) -> String;
}

/// Fire-and-forget sink for job failures. The scheduler never blocks or
/// retries based on what the sink does.
pub trait ErrorReporter: Send + Sync {
    fn record_error(&self, source: &str, error: &anyhow::Error);
}

/// Default sink that forwards failures to the `tracing` error level.
#[derive(Debug, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn record_error(&self, source: &str, error: &anyhow::Error) {
        error!(source = %source, "job execution failed: {:#}", error);
    }
}
