//! # batchexec
//!
//! In-process execution core for batches of independent jobs. A batch is
//! one call that derives a job from every input item plus a once-computed
//! shared state, runs each job exactly once (sequentially or on a bounded
//! worker pool), tolerates individual job failures without aborting the
//! batch, and reduces every job's outcome into one [`BatchStatistics`]
//! value.
//!
//! ## Modules
//!
//! - `config` - Worker-pool sizing knobs and execution flags
//! - `error` - Batch-level error taxonomy
//! - `executor` - Sequential and parallel execution strategies plus the mode selector
//! - `job` - Job identity, lifecycle state, and the per-job runner
//! - `monitor` - Concurrent collection of submitted jobs
//! - `processor` - The job-logic collaborator contract and error-reporting sink
//! - `statistics` - Aggregate batch statistics and their reduction

pub mod config;
pub mod error;
pub mod executor;
pub mod job;
pub mod monitor;
pub mod processor;
pub mod statistics;

pub use config::ExecutionConfig;
pub use error::{BatchError, BatchResult};
pub use executor::{BatchExecutor, ParallelExecutor, SequentialExecutor};
pub use job::{JobDescription, JobOutcome, JobSnapshot, JobState};
pub use monitor::{JobMonitor, SubmittedJob};
pub use processor::{
    BatchContext, ErrorReporter, JobParameters, JobProcessor, TracingErrorReporter,
};
pub use statistics::BatchStatistics;
