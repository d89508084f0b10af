//! Batch-level error taxonomy
//!
//! A batch call either returns a complete [`BatchStatistics`] or one of
//! these errors; individual job failures are recovered inside the batch
//! and never surface here.
//!
//! [`BatchStatistics`]: crate::statistics::BatchStatistics

use crate::statistics::BatchStatistics;
use thiserror::Error;

/// Errors that abort or taint an entire batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The before-any-job hook failed; no jobs were submitted and no
    /// statistics exist.
    #[error("batch setup failed before any job was submitted")]
    SetupFailed {
        #[source]
        source: anyhow::Error,
    },

    /// The after-all-jobs hook failed. Every job already reached its
    /// terminal outcome, so the statistics carried here remain valid.
    #[error("batch teardown failed after all jobs reached a terminal outcome")]
    TeardownFailed {
        statistics: BatchStatistics,
        #[source]
        source: anyhow::Error,
    },
}

pub type BatchResult<T> = Result<T, BatchError>;
