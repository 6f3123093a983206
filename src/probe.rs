// src/probe.rs
//! Live HTTP reachability probe for discovered hostnames

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

use crate::config::ProbeConfig;

/// Sends a HEAD request per hostname and reports the status code.
///
/// Probe failures never fail the run; every error path collapses to None.
pub struct HttpProber {
    enabled: bool,
    scheme: String,
    http_client: reqwest::Client,
}

impl HttpProber {
    /// Create a new prober from config
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build probe HTTP client")?;

        Ok(Self {
            enabled: config.enabled,
            scheme: config.scheme.clone(),
            http_client,
        })
    }

    /// Create a prober that never sends requests (--no-probe)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            scheme: "https".to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// HEAD {scheme}://{host} and return the status code.
    ///
    /// Timeouts, DNS failures, TLS errors and refused connections all
    /// degrade to None. Wildcard names are skipped without a request.
    pub async fn status(&self, host: &str) -> Option<u16> {
        if !self.enabled {
            return None;
        }

        if host.starts_with("*.") {
            debug!("Skipping probe for wildcard name {}", host);
            return None;
        }

        let url = format!("{}://{}", self.scheme, host);

        match self.http_client.head(&url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                debug!("Probe {} -> {}", url, code);
                Some(code)
            }
            Err(e) => {
                debug!("Probe {} failed: {}", url, e);
                None
            }
        }
    }
}
