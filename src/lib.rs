// Thu Aug 27 2026 - Alex

pub mod config;
pub mod error;
pub mod source;
pub mod table;
pub mod rank;
pub mod output;
pub mod engine;
pub mod utils;

pub use config::{available_workers, BatchFailurePolicy, Config};
pub use error::CensusError;
pub use source::{AgeSource, AgeSourceFactory, SourceError, SourceGuard};
pub use table::{accumulate, FrequencyTable, InvalidAgeError};
pub use rank::{RankedEntry, TopKRanker};
pub use output::ResultFormatter;
pub use engine::{Census, MergeCoordinator};
