use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing quality compromises made while resampling.
///
/// The counters use relaxed atomics so that a sampler shared across rayon
/// worker threads can update them without synchronization. They are owned
/// by whoever builds the sampler; there is no process-wide state.
#[derive(Debug, Default)]
pub struct SampleStats {
    clipped_footprints: AtomicU64,
}

impl SampleStats {
    /// Create a fresh set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluation whose averaging footprint spilled past the
    /// resident pixel window and was truncated to it.
    pub fn record_clipped_footprint(&self) {
        self.clipped_footprints.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of evaluations so far whose footprint was truncated.
    pub fn clipped_footprints(&self) -> u64 {
        self.clipped_footprints.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.clipped_footprints.store(0, Ordering::Relaxed);
    }
}
