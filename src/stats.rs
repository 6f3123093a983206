// src/stats.rs
//! Run statistics for crtscan

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Thread-safe statistics collector
#[derive(Clone)]
pub struct StatsCollector {
    entries_fetched: Arc<AtomicU64>,
    rows_emitted: Arc<AtomicU64>,
    duplicates_skipped: Arc<AtomicU64>,
    probes_succeeded: Arc<AtomicU64>,
    probes_failed: Arc<AtomicU64>,
    start_time: Instant,
}

/// Snapshot of statistics at a point in time
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub entries_fetched: u64,
    pub rows_emitted: u64,
    pub duplicates_skipped: u64,
    pub probes_succeeded: u64,
    pub probes_failed: u64,
    pub elapsed_secs: u64,
}

impl StatsCollector {
    /// Create a new StatsCollector
    pub fn new() -> Self {
        Self {
            entries_fetched: Arc::new(AtomicU64::new(0)),
            rows_emitted: Arc::new(AtomicU64::new(0)),
            duplicates_skipped: Arc::new(AtomicU64::new(0)),
            probes_succeeded: Arc::new(AtomicU64::new(0)),
            probes_failed: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn set_entries_fetched(&self, count: u64) {
        self.entries_fetched.store(count, Ordering::Relaxed);
    }

    pub fn increment_rows(&self) {
        self.rows_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_duplicates(&self) {
        self.duplicates_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_probes_succeeded(&self) {
        self.probes_succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_probes_failed(&self) {
        self.probes_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current statistics snapshot
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            entries_fetched: self.entries_fetched.load(Ordering::Relaxed),
            rows_emitted: self.rows_emitted.load(Ordering::Relaxed),
            duplicates_skipped: self.duplicates_skipped.load(Ordering::Relaxed),
            probes_succeeded: self.probes_succeeded.load(Ordering::Relaxed),
            probes_failed: self.probes_failed.load(Ordering::Relaxed),
            elapsed_secs: self.start_time.elapsed().as_secs(),
        }
    }

    /// Format statistics as a human-readable one-liner
    pub fn format_stats(&self) -> String {
        let s = self.snapshot();
        format!(
            "{} fetched | {} rows | {} duplicates skipped | probes: {} ok / {} failed | {}",
            s.entries_fetched,
            s.rows_emitted,
            s.duplicates_skipped,
            s.probes_succeeded,
            s.probes_failed,
            Self::format_elapsed(s.elapsed_secs)
        )
    }

    /// Format elapsed duration
    pub fn format_elapsed(secs: u64) -> String {
        let minutes = secs / 60;
        let seconds = secs % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}
