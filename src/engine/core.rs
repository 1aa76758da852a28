// Fri Aug 28 2026 - Alex

use std::sync::Arc;

use crate::config::Config;
use crate::engine::coordinator::MergeCoordinator;
use crate::error::CensusError;
use crate::output::ResultFormatter;
use crate::rank::TopKRanker;
use crate::source::AgeSourceFactory;

/// Top-3 age calculator over a caller-supplied source factory. Holds only
/// the resolved configuration, the coordinator and the worker pool; every
/// call builds its own frequency table, so an instance is stateless across
/// calls and safe to share between threads.
pub struct Census {
    config: Config,
    coordinator: MergeCoordinator,
    ranker: TopKRanker,
}

impl Census {
    pub fn new(factory: Arc<dyn AgeSourceFactory>) -> Result<Self, CensusError> {
        Self::with_config(factory, Config::default())
    }

    pub fn with_config(
        factory: Arc<dyn AgeSourceFactory>,
        config: Config,
    ) -> Result<Self, CensusError> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count)
            .build()
            .map_err(|e| CensusError::Configuration(e.to_string()))?;
        let coordinator = MergeCoordinator::new(factory, Arc::new(pool), &config);
        let ranker = TopKRanker::new(config.max_rank_levels);
        Ok(Self {
            config,
            coordinator,
            ranker,
        })
    }

    /// The most frequent ages of one region, as `rank:age=count` strings.
    /// An unknown region yields an empty list; a negative age in the
    /// region's stream fails the call.
    pub fn top3_ages(&self, region: &str) -> Result<Vec<String>, CensusError> {
        let table = self.coordinator.collect_single(region)?;
        let entries = self.ranker.rank(table.snapshot());
        Ok(ResultFormatter::format_all(&entries))
    }

    /// Combined ranking across all given regions, same format. Per-region
    /// failures follow the configured `BatchFailurePolicy`.
    pub fn top3_ages_batch<I, S>(&self, regions: I) -> Result<Vec<String>, CensusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regions: Vec<String> = regions
            .into_iter()
            .map(|region| region.as_ref().to_string())
            .collect();
        let table = self.coordinator.collect_batch(&regions)?;
        let entries = self.ranker.rank(table.snapshot());
        Ok(ResultFormatter::format_all(&entries))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
