//! Execution strategies and the mode selector
//!
//! Both strategies satisfy one contract: `execute(processor, items,
//! context, reporter)` returns a complete [`BatchStatistics`] or a
//! [`BatchError`], nothing in between. [`BatchExecutor::select`] picks the
//! strategy for a batch from a runtime flag.
//!
//! [`BatchStatistics`]: crate::statistics::BatchStatistics
//! [`BatchError`]: crate::error::BatchError

pub mod parallel;
pub mod pool;
pub mod sequential;

pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

use crate::config::ExecutionConfig;
use crate::error::BatchResult;
use crate::processor::{BatchContext, ErrorReporter, JobProcessor};
use crate::statistics::BatchStatistics;
use std::sync::Arc;

/// The execution strategy chosen for one batch.
#[derive(Debug, Clone)]
pub enum BatchExecutor {
    Sequential(SequentialExecutor),
    Parallel(ParallelExecutor),
}

impl BatchExecutor {
    /// Choose a strategy: sequential when `debug_mode` is set (jobs run on
    /// the calling task, in input order), parallel otherwise. Pure
    /// factory; performs no I/O and cannot fail.
    pub fn select(debug_mode: bool, config: ExecutionConfig) -> Self {
        if debug_mode {
            BatchExecutor::Sequential(SequentialExecutor::new(config))
        } else {
            BatchExecutor::Parallel(ParallelExecutor::new(config))
        }
    }

    /// Run one batch to completion under the selected strategy.
    pub async fn execute<P: JobProcessor>(
        &self,
        processor: Arc<P>,
        items: Vec<P::Item>,
        context: BatchContext,
        reporter: Arc<dyn ErrorReporter>,
    ) -> BatchResult<BatchStatistics> {
        match self {
            BatchExecutor::Sequential(executor) => {
                executor.execute(processor, items, context, reporter).await
            }
            BatchExecutor::Parallel(executor) => {
                executor.execute(processor, items, context, reporter).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_debug_flag() {
        let sequential = BatchExecutor::select(true, ExecutionConfig::default());
        assert!(matches!(sequential, BatchExecutor::Sequential(_)));

        let parallel = BatchExecutor::select(false, ExecutionConfig::default());
        assert!(matches!(parallel, BatchExecutor::Parallel(_)));
    }
}
