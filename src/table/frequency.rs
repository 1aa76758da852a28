// Thu Aug 27 2026 - Alex

use ahash::AHashMap;
use parking_lot::Mutex;

pub const DEFAULT_SHARD_COUNT: usize = 16;

/// Concurrent age -> count table, striped over a fixed set of shards so
/// independent workers can increment and merge without a global lock.
/// Counts only ever grow; the final contents are independent of the order
/// in which contributors ran.
#[derive(Debug)]
pub struct FrequencyTable {
    shards: Vec<Mutex<AHashMap<u32, u64>>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARD_COUNT)
    }

    pub fn with_shards(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let mut shards = Vec::with_capacity(shard_count);
        for _ in 0..shard_count {
            shards.push(Mutex::new(AHashMap::new()));
        }
        Self { shards }
    }

    fn shard_for(&self, age: u32) -> &Mutex<AHashMap<u32, u64>> {
        &self.shards[age as usize % self.shards.len()]
    }

    pub fn increment(&self, age: u32) {
        self.add(age, 1);
    }

    pub fn add(&self, age: u32, count: u64) {
        if count == 0 {
            return;
        }
        let mut shard = self.shard_for(age).lock();
        *shard.entry(age).or_insert(0) += count;
    }

    /// Folds another table into this one, entry by entry. Addition is
    /// associative and commutative, so absorption order does not affect
    /// the result.
    pub fn absorb(&self, other: FrequencyTable) {
        for shard in other.shards {
            for (age, count) in shard.into_inner() {
                self.add(age, count);
            }
        }
    }

    pub fn count_of(&self, age: u32) -> u64 {
        self.shard_for(age).lock().get(&age).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> Vec<(u32, u64)> {
        let mut entries = Vec::with_capacity(self.distinct());
        for shard in &self.shards {
            for (&age, &count) in shard.lock().iter() {
                entries.push((age, count));
            }
        }
        entries
    }

    /// Sum of all counts, i.e. the number of valid ages consumed into this
    /// table.
    pub fn total(&self) -> u64 {
        self.shards
            .iter()
            .map(|shard| shard.lock().values().sum::<u64>())
            .sum()
    }

    pub fn distinct(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
