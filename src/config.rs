// Thu Aug 27 2026 - Alex

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::CensusError;

static AVAILABLE_WORKERS: Lazy<usize> = Lazy::new(num_cpus::get);

/// Host parallelism, resolved once per process.
pub fn available_workers() -> usize {
    *AVAILABLE_WORKERS
}

/// How a batch call reacts to a region that fails with an invalid age or a
/// release failure. Applied after the join barrier, in input order, so the
/// outcome never depends on which worker finished first. Regions that are
/// simply absent are skipped under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchFailurePolicy {
    /// The whole batch fails, surfacing the error of the first failed
    /// region in input order.
    FailFast,
    /// The failed region is logged at warn and its contribution discarded;
    /// the remaining regions are ranked normally.
    ContinueOnError,
}

impl Default for BatchFailurePolicy {
    fn default() -> Self {
        BatchFailurePolicy::FailFast
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub worker_count: usize,
    pub batch_policy: BatchFailurePolicy,
    pub shard_count: usize,
    pub max_rank_levels: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker_count: available_workers(),
            batch_policy: BatchFailurePolicy::FailFast,
            shard_count: 16,
            max_rank_levels: 3,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    pub fn with_batch_policy(mut self, policy: BatchFailurePolicy) -> Self {
        self.batch_policy = policy;
        self
    }

    pub fn with_shard_count(mut self, count: usize) -> Self {
        self.shard_count = count;
        self
    }

    pub fn with_max_rank_levels(mut self, levels: usize) -> Self {
        self.max_rank_levels = levels;
        self
    }

    pub fn validate(&self) -> Result<(), CensusError> {
        if self.worker_count == 0 {
            return Err(CensusError::Configuration(
                "worker_count must be greater than 0".to_string(),
            ));
        }
        if self.shard_count == 0 {
            return Err(CensusError::Configuration(
                "shard_count must be greater than 0".to_string(),
            ));
        }
        if self.max_rank_levels == 0 {
            return Err(CensusError::Configuration(
                "max_rank_levels must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_host_workers() {
        let config = Config::default();
        assert_eq!(config.worker_count, available_workers());
        assert!(config.worker_count > 0);
        assert_eq!(config.batch_policy, BatchFailurePolicy::FailFast);
        assert_eq!(config.max_rank_levels, 3);
    }

    #[test]
    fn test_available_workers_is_stable() {
        assert_eq!(available_workers(), available_workers());
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_worker_count(2)
            .with_batch_policy(BatchFailurePolicy::ContinueOnError)
            .with_shard_count(4)
            .with_max_rank_levels(5);
        assert_eq!(config.worker_count, 2);
        assert_eq!(config.batch_policy, BatchFailurePolicy::ContinueOnError);
        assert_eq!(config.shard_count, 4);
        assert_eq!(config.max_rank_levels, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = Config::new().with_worker_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_shards() {
        let config = Config::new().with_shard_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_rank_levels() {
        let config = Config::new().with_max_rank_levels(0);
        assert!(config.validate().is_err());
    }
}
