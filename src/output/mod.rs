// src/output/mod.rs
//! Output handling abstraction for crtscan
//!
//! The report is rendered once at the end of a run; handlers receive the
//! full set of rows and format them for their destination.

use crate::types::Sighting;
use async_trait::async_trait;
use std::sync::Arc;

pub mod csv;
pub mod human;
pub mod json;

/// Trait for output handlers that render the final report
#[async_trait]
pub trait OutputHandler: Send + Sync {
    /// Emit the report rows
    async fn emit_report(&self, rows: &[Sighting]) -> anyhow::Result<()>;

    /// Flush any buffered output
    async fn flush(&self) -> anyhow::Result<()>;
}

/// Manager that dispatches output to multiple handlers
pub struct OutputManager {
    handlers: Vec<Arc<dyn OutputHandler>>,
}

impl OutputManager {
    /// Create a new OutputManager
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add an output handler
    pub fn add_handler(&mut self, handler: Arc<dyn OutputHandler>) {
        self.handlers.push(handler);
    }

    /// Emit the report to all handlers
    ///
    /// Errors from individual handlers are logged but don't stop the rest;
    /// the error is only surfaced when there is a single handler.
    pub async fn emit(&self, rows: &[Sighting]) -> anyhow::Result<()> {
        let mut last_error = None;

        for handler in &self.handlers {
            if let Err(e) = handler.emit_report(rows).await {
                tracing::warn!("Output handler error: {}", e);
                last_error = Some(e);
            }
        }

        if let Some(err) = last_error {
            if self.handlers.len() == 1 {
                return Err(err);
            }
        }

        Ok(())
    }

    /// Flush all handlers
    pub async fn flush(&self) -> anyhow::Result<()> {
        for handler in &self.handlers {
            handler.flush().await?;
        }
        Ok(())
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub(crate) fn test_rows() -> Vec<Sighting> {
        let not_before = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 11, 12)
            .unwrap();
        let not_after = NaiveDate::from_ymd_opt(2024, 8, 30)
            .unwrap()
            .and_hms_opt(9, 11, 11)
            .unwrap();

        vec![
            Sighting {
                common_name: "www.example.com".to_string(),
                issuer_ca_id: 185756,
                not_before,
                not_after,
                status_code: Some(200),
            },
            Sighting {
                common_name: "offline.example.com".to_string(),
                issuer_ca_id: 185756,
                not_before,
                not_after,
                status_code: None,
            },
        ]
    }

    #[tokio::test]
    async fn test_output_manager_no_handlers() {
        let manager = OutputManager::new();

        // Should succeed with no handlers
        assert!(manager.emit(&test_rows()).await.is_ok());
        assert!(manager.flush().await.is_ok());
    }

    #[tokio::test]
    async fn test_output_manager_with_handler() {
        let mut manager = OutputManager::new();
        manager.add_handler(Arc::new(json::JsonOutput::new()));

        assert!(manager.emit(&test_rows()).await.is_ok());
    }
}
