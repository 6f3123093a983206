// src/crtsh.rs
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::CrtShConfig;
use crate::types::CrtShEntry;

/// HTTP client for the crt.sh JSON search endpoint
pub struct CrtShClient {
    base_url: String,
    exclude_expired: bool,
    http_client: reqwest::Client,
}

impl CrtShClient {
    /// Create a new crt.sh client from config
    pub fn new(config: &CrtShConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.clone(),
            exclude_expired: config.exclude_expired,
            http_client,
        })
    }

    /// Build the search URL for a query pattern
    fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid crt.sh base URL: {}", self.base_url))?;

        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("output", "json");

        if self.exclude_expired {
            url.query_pairs_mut().append_pair("exclude", "expired");
        }

        Ok(url)
    }

    /// Search crt.sh for certificates matching a query pattern.
    /// Endpoint: GET {base_url}/?q={query}&output=json[&exclude=expired]
    ///
    /// A non-success response is a hard error; the caller is expected to
    /// abort the run.
    pub async fn search(&self, query: &str) -> Result<Vec<CrtShEntry>> {
        let url = self.search_url(query)?;

        debug!("Fetching certificates from {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .context("Failed to reach crt.sh")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "crt.sh query failed with status {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            );
        }

        // crt.sh returns plain text (not JSON) when overloaded; keep the
        // body around so the parse error can say what came back.
        let body = response
            .text()
            .await
            .context("Failed to read crt.sh response body")?;

        let entries: Vec<CrtShEntry> = serde_json::from_str(&body).with_context(|| {
            format!(
                "Failed to parse crt.sh JSON (body starts with: {:.60})",
                body
            )
        })?;

        debug!("Received {} certificate entries", entries.len());

        Ok(entries)
    }
}
