// Thu Aug 27 2026 - Alex

pub mod frequency;
pub mod accumulator;

pub use frequency::FrequencyTable;
pub use accumulator::{accumulate, InvalidAgeError};
