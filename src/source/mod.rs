// Thu Aug 27 2026 - Alex

pub mod provider;
pub mod guard;

pub use provider::{AgeSource, AgeSourceFactory, SourceError};
pub use guard::SourceGuard;
