// Thu Aug 27 2026 - Alex

use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RANK_LEVELS: usize = 3;

/// One output row: `age` holds `rank` with `count` occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub age: u32,
    pub count: u64,
}

/// Ranks ages by distinct frequency level. Ranks increase only between
/// count groups, never within one, so ties share a rank and a started
/// level is always emitted in full; at most `max_levels` levels are
/// started. Ages are ascending within a level to keep output reproducible.
///
/// One sort over the distinct counts plus one per-level age sort, so the
/// cost is O(n log n) in distinct ages with no per-rank rescans.
pub struct TopKRanker {
    max_levels: usize,
}

impl TopKRanker {
    pub fn new(max_levels: usize) -> Self {
        Self {
            max_levels: max_levels.max(1),
        }
    }

    pub fn rank(&self, counts: Vec<(u32, u64)>) -> Vec<RankedEntry> {
        let mut by_count: AHashMap<u64, Vec<u32>> = AHashMap::new();
        for (age, count) in counts {
            by_count.entry(count).or_default().push(age);
        }

        let levels: Vec<u64> = by_count
            .keys()
            .copied()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .take(self.max_levels)
            .collect();

        let mut entries = Vec::new();
        for (index, count) in levels.into_iter().enumerate() {
            if let Some(mut ages) = by_count.remove(&count) {
                ages.sort_unstable();
                for age in ages {
                    entries.push(RankedEntry {
                        rank: index + 1,
                        age,
                        count,
                    });
                }
            }
        }
        entries
    }
}

impl Default for TopKRanker {
    fn default() -> Self {
        Self::new(DEFAULT_RANK_LEVELS)
    }
}
