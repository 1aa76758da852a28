// Thu Aug 27 2026 - Alex

pub mod ranker;

pub use ranker::{RankedEntry, TopKRanker, DEFAULT_RANK_LEVELS};
