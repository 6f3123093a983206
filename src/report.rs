// src/report.rs
//! Report assembly: the fetch → probe → dedupe linear scan

use crate::dedupe::Dedupe;
use crate::probe::HttpProber;
use crate::progress::ProbeProgress;
use crate::stats::StatsCollector;
use crate::types::{CrtShEntry, Sighting};

/// Build the report rows from raw crt.sh entries.
///
/// Entries without any usable name are dropped. With `keep_duplicates`
/// false, only the first sighting per common name survives; input order is
/// preserved either way. Each surviving row is probed for reachability.
pub async fn build_report(
    entries: &[CrtShEntry],
    prober: &HttpProber,
    keep_duplicates: bool,
    stats: &StatsCollector,
    progress: &ProbeProgress,
) -> Vec<Sighting> {
    let mut dedupe = Dedupe::new();
    let mut rows = Vec::new();

    stats.set_entries_fetched(entries.len() as u64);

    for (index, entry) in entries.iter().enumerate() {
        let Some(mut sighting) = Sighting::from_entry(entry) else {
            tracing::debug!("Dropping entry {} with no usable name", entry.id);
            continue;
        };

        if !keep_duplicates && !dedupe.should_emit(&sighting.common_name) {
            stats.increment_duplicates();
            continue;
        }

        if prober.is_enabled() && !sighting.is_wildcard() {
            progress.probing(&sighting.common_name, index + 1, entries.len());
            sighting.status_code = prober.status(&sighting.common_name).await;

            match sighting.status_code {
                Some(_) => stats.increment_probes_succeeded(),
                None => stats.increment_probes_failed(),
            }
        }

        tracing::debug!("Row: {}", sighting);
        stats.increment_rows();
        rows.push(sighting);
    }

    progress.finish();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: u64, common_name: &str) -> CrtShEntry {
        CrtShEntry {
            id,
            issuer_ca_id: 1,
            issuer_name: "Test CA".to_string(),
            common_name: Some(common_name.to_string()),
            name_value: common_name.to_string(),
            not_before: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            not_after: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            serial_number: format!("{:02x}", id),
        }
    }

    fn fixtures() -> Vec<CrtShEntry> {
        vec![
            entry(1, "www.example.com"),
            entry(2, "www.example.com"),
            entry(3, "api.example.com"),
        ]
    }

    #[tokio::test]
    async fn test_dedupe_drops_repeated_common_names() {
        let stats = StatsCollector::new();
        let progress = ProbeProgress::new(false);
        let prober = HttpProber::disabled();

        let rows = build_report(&fixtures(), &prober, false, &stats, &progress).await;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].common_name, "www.example.com");
        assert_eq!(rows[1].common_name, "api.example.com");

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.entries_fetched, 3);
        assert_eq!(snapshot.rows_emitted, 2);
        assert_eq!(snapshot.duplicates_skipped, 1);
    }

    #[tokio::test]
    async fn test_keep_duplicates_keeps_every_row() {
        let stats = StatsCollector::new();
        let progress = ProbeProgress::new(false);
        let prober = HttpProber::disabled();

        let rows = build_report(&fixtures(), &prober, true, &stats, &progress).await;

        assert_eq!(rows.len(), 3);
        assert_eq!(stats.snapshot().duplicates_skipped, 0);
    }

    #[tokio::test]
    async fn test_unnamed_entries_are_dropped() {
        let mut entries = fixtures();
        entries.push(CrtShEntry {
            common_name: None,
            name_value: String::new(),
            ..entry(4, "unused")
        });

        let stats = StatsCollector::new();
        let progress = ProbeProgress::new(false);
        let prober = HttpProber::disabled();

        let rows = build_report(&entries, &prober, true, &stats, &progress).await;

        assert_eq!(rows.len(), 3);
        assert_eq!(stats.snapshot().entries_fetched, 4);
    }

    #[tokio::test]
    async fn test_disabled_prober_leaves_status_null() {
        let stats = StatsCollector::new();
        let progress = ProbeProgress::new(false);
        let prober = HttpProber::disabled();

        let rows = build_report(&fixtures(), &prober, true, &stats, &progress).await;

        assert!(rows.iter().all(|r| r.status_code.is_none()));
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.probes_succeeded, 0);
        assert_eq!(snapshot.probes_failed, 0);
    }

    #[tokio::test]
    async fn test_wildcard_rows_are_never_probed() {
        use crate::config::ProbeConfig;

        let entries = vec![entry(1, "*.example.com")];
        let stats = StatsCollector::new();
        let progress = ProbeProgress::new(false);
        let prober = HttpProber::new(&ProbeConfig {
            enabled: true,
            timeout_secs: 1,
            scheme: "http".to_string(),
        })
        .unwrap();

        let rows = build_report(&entries, &prober, true, &stats, &progress).await;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status_code, None);
        // Skipped, not failed
        assert_eq!(stats.snapshot().probes_failed, 0);
    }
}
