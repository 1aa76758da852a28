// Fri Aug 28 2026 - Alex

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::source::{AgeSource, AgeSourceFactory, SourceError};

/// In-memory source over a fixed list of raw ages. Tracks closes so tests
/// can assert the scoped-release contract.
pub struct StaticAgeSource {
    ages: std::vec::IntoIter<i32>,
    closes: Arc<AtomicUsize>,
    fail_close: bool,
}

impl StaticAgeSource {
    pub fn new(ages: Vec<i32>) -> Self {
        Self::with_close_tracker(ages, Arc::new(AtomicUsize::new(0)))
    }

    pub fn with_close_tracker(ages: Vec<i32>, closes: Arc<AtomicUsize>) -> Self {
        Self {
            ages: ages.into_iter(),
            closes,
            fail_close: false,
        }
    }

    pub fn failing_close(ages: Vec<i32>) -> Self {
        let mut source = Self::new(ages);
        source.fail_close = true;
        source
    }
}

impl Iterator for StaticAgeSource {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.ages.next()
    }
}

impl AgeSource for StaticAgeSource {
    fn close(&mut self) -> Result<(), SourceError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            Err(SourceError::Release("simulated close failure".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Factory over a fixed region -> ages map; any other region is reported
/// as not found. All sources it opens share one close counter.
pub struct MapSourceFactory {
    regions: HashMap<String, Vec<i32>>,
    fail_close_regions: Vec<String>,
    closes: Arc<AtomicUsize>,
}

impl MapSourceFactory {
    pub fn new(regions: HashMap<String, Vec<i32>>) -> Self {
        Self {
            regions,
            fail_close_regions: Vec::new(),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Marks a region whose source will fail on close.
    pub fn with_failing_close(mut self, region: &str) -> Self {
        self.fail_close_regions.push(region.to_string());
        self
    }

    pub fn closes(&self) -> Arc<AtomicUsize> {
        self.closes.clone()
    }
}

impl AgeSourceFactory for MapSourceFactory {
    fn open(&self, region: &str) -> Result<Box<dyn AgeSource + Send>, SourceError> {
        match self.regions.get(region) {
            Some(ages) => {
                let mut source =
                    StaticAgeSource::with_close_tracker(ages.clone(), self.closes.clone());
                if self.fail_close_regions.iter().any(|r| r == region) {
                    source.fail_close = true;
                }
                Ok(Box::new(source))
            }
            None => Err(SourceError::RegionNotFound(region.to_string())),
        }
    }
}

/// Builds the backing map for `MapSourceFactory` from literal pairs.
pub fn region_map(entries: &[(&str, Vec<i32>)]) -> HashMap<String, Vec<i32>> {
    entries
        .iter()
        .map(|(region, ages)| (region.to_string(), ages.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_opens_known_region() {
        let factory = MapSourceFactory::new(region_map(&[("north", vec![1, 2])]));
        let source = factory.open("north").unwrap();
        assert_eq!(source.collect::<Vec<i32>>(), vec![1, 2]);
    }

    #[test]
    fn test_factory_signals_absence() {
        let factory = MapSourceFactory::new(region_map(&[("north", vec![1])]));
        assert!(matches!(
            factory.open("atlantis"),
            Err(SourceError::RegionNotFound(_))
        ));
    }

    #[test]
    fn test_close_counter_shared_across_sources() {
        let factory = MapSourceFactory::new(region_map(&[("a", vec![1]), ("b", vec![2])]));
        let closes = factory.closes();
        let mut first = factory.open("a").unwrap();
        let mut second = factory.open("b").unwrap();
        first.close().unwrap();
        second.close().unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 2);
    }
}
