//! Operation counters
//!
//! Each group keeps one [`OpCounters`] instance. Counting is relaxed-atomic
//! so the counters can live in statics; the harness itself is single-threaded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters for one group
#[derive(Debug, Default)]
pub struct OpCounters {
    additions: AtomicU64,
    msm_calls: AtomicU64,
    msm_terms: AtomicU64,
}

/// Snapshot of [`OpCounters`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub additions: u64,
    pub msm_calls: u64,
    pub msm_terms: u64,
}

impl OpCounts {
    /// Named counter values, in a fixed order
    pub fn entries(&self) -> [(&'static str, u64); 3] {
        [
            ("additions", self.additions),
            ("msm_calls", self.msm_calls),
            ("msm_terms", self.msm_terms),
        ]
    }
}

impl OpCounters {
    pub const fn new() -> Self {
        Self {
            additions: AtomicU64::new(0),
            msm_calls: AtomicU64::new(0),
            msm_terms: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_addition(&self) {
        self.additions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_msm(&self, terms: usize) {
        self.msm_calls.fetch_add(1, Ordering::Relaxed);
        self.msm_terms.fetch_add(terms as u64, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.additions.store(0, Ordering::Relaxed);
        self.msm_calls.store(0, Ordering::Relaxed);
        self.msm_terms.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> OpCounts {
        OpCounts {
            additions: self.additions.load(Ordering::Relaxed),
            msm_calls: self.msm_calls.load(Ordering::Relaxed),
            msm_terms: self.msm_terms.load(Ordering::Relaxed),
        }
    }
}
