//! Filter processing statistics

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for filter evaluation, shareable across threads
#[derive(Debug, Default)]
pub struct FilterStats {
    /// Records handed to the filter
    pub records_examined: AtomicU64,
    /// Records that satisfied every descriptor
    pub records_matched: AtomicU64,
    /// Individual descriptor evaluations, after short-circuiting
    pub descriptors_evaluated: AtomicU64,
}

/// Point-in-time copy of [`FilterStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStatsSnapshot {
    pub records_examined: u64,
    pub records_matched: u64,
    pub descriptors_evaluated: u64,
}

impl FilterStats {
    /// Create new filter statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a record examined
    pub fn record_examined(&self) {
        self.records_examined.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a match found
    pub fn record_match(&self) {
        self.records_matched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a descriptor evaluation
    pub fn record_descriptor(&self) {
        self.descriptors_evaluated.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> FilterStatsSnapshot {
        FilterStatsSnapshot {
            records_examined: self.records_examined.load(Ordering::Relaxed),
            records_matched: self.records_matched.load(Ordering::Relaxed),
            descriptors_evaluated: self.descriptors_evaluated.load(Ordering::Relaxed),
        }
    }

    /// Share of examined records that matched, `0.0` before any work
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn match_ratio(&self) -> f64 {
        let snapshot = self.snapshot();
        if snapshot.records_examined == 0 {
            return 0.0;
        }
        snapshot.records_matched as f64 / snapshot.records_examined as f64
    }
}
