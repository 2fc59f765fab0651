// src/estimator.rs

//! Running character count for the produced output document.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Accumulates a running character count and compares it to a threshold.
///
/// Purely additive; performs no I/O. Like [`crate::CancellationToken`], it is
/// a cloneable handle around shared atomic state, so an observing thread can
/// poll the estimate live while the worker combines.
///
/// # Examples
///
/// ```
/// use codecat::SizeEstimator;
///
/// let estimator = SizeEstimator::new();
/// estimator.accumulate(120_000);
/// estimator.accumulate(400_000);
/// assert_eq!(estimator.current_estimate(), 520_000);
/// assert!(estimator.exceeds(500_000));
/// assert!(!estimator.exceeds(600_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SizeEstimator {
    total: Arc<AtomicUsize>,
}

impl SizeEstimator {
    /// Creates a new estimator with a zero total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `characters` to the running total.
    pub fn accumulate(&self, characters: usize) {
        self.total.fetch_add(characters, Ordering::Relaxed);
    }

    /// Returns the current running total.
    pub fn current_estimate(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Returns `true` if the running total is strictly greater than `threshold`.
    pub fn exceeds(&self, threshold: usize) -> bool {
        self.current_estimate() > threshold
    }
}
