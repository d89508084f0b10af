//! Configuration consumed by the execution core
//!
//! The host application owns configuration loading; this crate only
//! consumes the deserialized values. All fields have serde defaults so the
//! struct can be embedded in a larger configuration file.

use serde::{Deserialize, Serialize};

/// Knobs for worker-pool sizing and per-job flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Upper bound on worker count (0 = no cap beyond hardware availability)
    #[serde(default)]
    pub max_num_processors: usize,
    /// Cores left unused for the host system when sizing the pool
    #[serde(default = "default_keep_processors_free")]
    pub keep_processors_free: usize,
    /// Forwarded opaquely to the job logic in per-job parameters
    #[serde(default)]
    pub suppress_errors: bool,
    /// Enables per-job start/finish log lines
    #[serde(default)]
    pub detailed_logging: bool,
    /// Per-job log lines are only emitted for batches smaller than this
    #[serde(default = "default_show_ongoing_jobs_less_than")]
    pub show_ongoing_jobs_less_than: usize,
}

fn default_keep_processors_free() -> usize {
    1
}

fn default_show_ongoing_jobs_less_than() -> usize {
    20
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_num_processors: 0,
            keep_processors_free: default_keep_processors_free(),
            suppress_errors: false,
            detailed_logging: false,
            show_ongoing_jobs_less_than: default_show_ongoing_jobs_less_than(),
        }
    }
}

impl ExecutionConfig {
    /// Whether per-job progress lines should be emitted for a batch of
    /// `total_items` jobs.
    pub fn log_ongoing_jobs(&self, total_items: usize) -> bool {
        self.detailed_logging && total_items < self.show_ongoing_jobs_less_than
    }
}
