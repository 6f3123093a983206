// src/progress.rs
//! Spinner shown while hostnames are being probed

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner covering the probe phase of a run.
///
/// A disabled instance is a no-op, used for machine output formats and
/// non-TTY stdout. The spinner is cleared once probing ends so the grid
/// table never interleaves with spinner redraws.
pub struct ProbeProgress {
    spinner: Option<ProgressBar>,
}

impl ProbeProgress {
    pub fn new(enabled: bool) -> Self {
        let spinner = enabled.then(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .expect("Invalid template")
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        Self { spinner }
    }

    /// Update the spinner for the host currently being probed
    pub fn probing(&self, host: &str, done: usize, total: usize) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(format!("Probing {} ({}/{})", host, done, total));
        }
    }

    /// Clear the spinner once probing is over; the report owns stdout after this
    pub fn finish(&self) {
        if let Some(ref spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for ProbeProgress {
    fn drop(&mut self) {
        self.finish();
    }
}
