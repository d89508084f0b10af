//! Worker-pool sizing policy
//!
//! Sizing is a policy decision, not a platform limit: by default one core
//! is reserved for the host system, and an explicit cap from configuration
//! can lower (but never raise) the hardware-derived count. Headless batch
//! servers override the reserve through `keep_processors_free`.

use crate::config::ExecutionConfig;

/// Detected hardware concurrency, with a conservative fallback when the
/// platform cannot report it.
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}

/// Number of workers for a pool on a machine with `available` hardware
/// threads.
pub fn worker_count(config: &ExecutionConfig, available: usize) -> usize {
    let unreserved = available
        .saturating_sub(config.keep_processors_free)
        .max(1);
    if config.max_num_processors > 0 {
        unreserved.min(config.max_num_processors)
    } else {
        unreserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_num_processors: usize, keep_processors_free: usize) -> ExecutionConfig {
        ExecutionConfig {
            max_num_processors,
            keep_processors_free,
            ..Default::default()
        }
    }

    #[test]
    fn test_reserves_one_core_by_default() {
        assert_eq!(worker_count(&ExecutionConfig::default(), 8), 7);
    }

    #[test]
    fn test_cap_lowers_worker_count() {
        assert_eq!(worker_count(&config(4, 1), 8), 4);
    }

    #[test]
    fn test_cap_never_exceeds_hardware_availability() {
        // A large cap on a small machine still yields at most
        // available - reserved workers.
        assert_eq!(worker_count(&config(64, 1), 8), 7);
    }

    #[test]
    fn test_at_least_one_worker() {
        assert_eq!(worker_count(&config(0, 4), 2), 1);
        assert_eq!(worker_count(&config(0, 0), 1), 1);
    }

    #[test]
    fn test_zero_cap_means_uncapped() {
        assert_eq!(worker_count(&config(0, 2), 16), 14);
    }

    #[test]
    fn test_detected_parallelism_is_positive() {
        assert!(available_parallelism() >= 1);
    }
}
