// Thu Aug 27 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("no such region: {0}")]
    RegionNotFound(String),
    #[error("failed to release source: {0}")]
    Release(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A finite, non-restartable stream of raw age values for one region.
/// Values are raw because validation happens on the consuming side; a
/// negative value is invalid input, not a sentinel.
pub trait AgeSource: Iterator<Item = i32> {
    /// Releases any underlying resource. Called exactly once, after
    /// iteration completes or fails. A failure here is reportable and
    /// distinct from iteration failure.
    fn close(&mut self) -> Result<(), SourceError>;
}

/// Produces an open source for a named region. `RegionNotFound` is the
/// distinct absence signal ("no such region"), not "region with zero ages".
pub trait AgeSourceFactory: Send + Sync {
    fn open(&self, region: &str) -> Result<Box<dyn AgeSource + Send>, SourceError>;
}
