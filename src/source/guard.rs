// Thu Aug 27 2026 - Alex

use crate::source::provider::{AgeSource, SourceError};

/// Scoped holder for an open age source. The source is released on every
/// exit path: explicitly through `release`, which reports the close
/// failure, or best-effort in `Drop` when the guard is abandoned by an
/// early return or a panic. Release runs at most once.
pub struct SourceGuard {
    region: String,
    source: Option<Box<dyn AgeSource + Send>>,
}

impl SourceGuard {
    pub fn new(region: &str, source: Box<dyn AgeSource + Send>) -> Self {
        Self {
            region: region.to_string(),
            source: Some(source),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Closes the source. Consumes the guard so the close cannot run twice.
    pub fn release(mut self) -> Result<(), SourceError> {
        match self.source.take() {
            Some(mut source) => source.close(),
            None => Ok(()),
        }
    }
}

impl Iterator for SourceGuard {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.source.as_mut().and_then(|source| source.next())
    }
}

impl Drop for SourceGuard {
    fn drop(&mut self) {
        if let Some(mut source) = self.source.take() {
            if let Err(e) = source.close() {
                log::warn!(
                    "close failed for abandoned source of region '{}': {}",
                    self.region,
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::StaticAgeSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_iterates_in_order() {
        let source = StaticAgeSource::new(vec![3, 1, 2]);
        let guard = SourceGuard::new("north", Box::new(source));
        let ages: Vec<i32> = guard.collect();
        assert_eq!(ages, vec![3, 1, 2]);
    }

    #[test]
    fn test_release_closes_once() {
        let closes = Arc::new(AtomicUsize::new(0));
        let source = StaticAgeSource::with_close_tracker(vec![1], closes.clone());
        let guard = SourceGuard::new("north", Box::new(source));
        assert!(guard.release().is_ok());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_closes_abandoned_guard() {
        let closes = Arc::new(AtomicUsize::new(0));
        let source = StaticAgeSource::with_close_tracker(vec![1, 2], closes.clone());
        {
            let mut guard = SourceGuard::new("north", Box::new(source));
            let _ = guard.next();
        }
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_reports_close_failure() {
        let source = StaticAgeSource::failing_close(vec![1]);
        let guard = SourceGuard::new("north", Box::new(source));
        let result = guard.release();
        assert!(matches!(result, Err(SourceError::Release(_))));
    }
}
