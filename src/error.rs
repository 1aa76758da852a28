// Thu Aug 27 2026 - Alex

use thiserror::Error;

/// Unified failure type surfaced by the public operations.
#[derive(Error, Debug)]
pub enum CensusError {
    #[error("invalid age {age} in region '{region}'")]
    InvalidAge { region: String, age: i32 },
    #[error("failed to release age source for region '{region}': {reason}")]
    ReleaseFailed { region: String, reason: String },
    #[error("age source failure in region '{region}': {reason}")]
    Source { region: String, reason: String },
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
