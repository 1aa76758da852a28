// Fri Aug 28 2026 - Alex

use std::sync::Arc;

use rayon::prelude::*;

use crate::config::{BatchFailurePolicy, Config};
use crate::error::CensusError;
use crate::source::{AgeSourceFactory, SourceError, SourceGuard};
use crate::table::{accumulate, FrequencyTable};
use crate::utils::logging::scoped_timer;

/// Drives accumulation: one synchronous pass for a single region, one unit
/// of work per region on the bounded pool for a batch. Each batch unit
/// fills a region-local table and the shared table absorbs it only on
/// success, so a failed region contributes nothing.
pub struct MergeCoordinator {
    factory: Arc<dyn AgeSourceFactory>,
    pool: Arc<rayon::ThreadPool>,
    policy: BatchFailurePolicy,
    shard_count: usize,
}

impl MergeCoordinator {
    pub fn new(
        factory: Arc<dyn AgeSourceFactory>,
        pool: Arc<rayon::ThreadPool>,
        config: &Config,
    ) -> Self {
        Self {
            factory,
            pool,
            policy: config.batch_policy,
            shard_count: config.shard_count,
        }
    }

    /// Accumulates one region into a fresh table. An absent region yields
    /// an empty table, not a failure.
    pub fn collect_single(&self, region: &str) -> Result<FrequencyTable, CensusError> {
        let table = FrequencyTable::with_shards(self.shard_count);
        self.collect_region(region, &table)?;
        Ok(table)
    }

    /// Accumulates every region into one shared table. All units run to
    /// the join barrier before the failure policy is applied, walking the
    /// outcomes in input order, so the result never depends on which
    /// worker finished first.
    pub fn collect_batch(&self, regions: &[String]) -> Result<FrequencyTable, CensusError> {
        let _timer = scoped_timer("batch collect");
        let shared = FrequencyTable::with_shards(self.shard_count);

        let outcomes: Vec<Result<u64, CensusError>> = self.pool.install(|| {
            regions
                .par_iter()
                .map(|region| {
                    let local = FrequencyTable::with_shards(self.shard_count);
                    let consumed = self.collect_region(region, &local)?;
                    shared.absorb(local);
                    Ok(consumed)
                })
                .collect()
        });

        for (region, outcome) in regions.iter().zip(outcomes) {
            if let Err(e) = outcome {
                match self.policy {
                    BatchFailurePolicy::FailFast => return Err(e),
                    BatchFailurePolicy::ContinueOnError => {
                        log::warn!("dropping contribution of region '{}': {}", region, e);
                    }
                }
            }
        }

        Ok(shared)
    }

    /// One acquire-iterate-release pass. Returns the number of ages
    /// consumed; zero for an absent region. The source is released on
    /// every path; an iteration failure wins over a release failure from
    /// the same pass, which is then only logged.
    fn collect_region(&self, region: &str, table: &FrequencyTable) -> Result<u64, CensusError> {
        let source = match self.factory.open(region) {
            Ok(source) => source,
            Err(SourceError::RegionNotFound(_)) => {
                log::debug!("region '{}' not found, contributing nothing", region);
                return Ok(0);
            }
            Err(e) => {
                return Err(CensusError::Source {
                    region: region.to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let mut guard = SourceGuard::new(region, source);
        let outcome = accumulate(&mut guard, table);
        let released = guard.release();

        match outcome {
            Ok(consumed) => {
                released.map_err(|e| CensusError::ReleaseFailed {
                    region: region.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(consumed)
            }
            Err(e) => {
                if let Err(close_err) = released {
                    log::warn!("release also failed for region '{}': {}", region, close_err);
                }
                Err(CensusError::InvalidAge {
                    region: region.to_string(),
                    age: e.age,
                })
            }
        }
    }
}
