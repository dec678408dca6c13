// Ruleset Compare - Comparisons Client
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Fetches the comparison rule-sets from the server.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::models::Comparisons;

/// Path of the comparisons endpoint, relative to the configured server.
pub const COMPARISONS_PATH: &str = "/comparisons";

/// Build the full comparisons URL from a server endpoint.
pub fn comparisons_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), COMPARISONS_PATH)
}

/// HTTP client used for the comparisons request.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("ruleset-compare/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch and decode `GET <endpoint>/comparisons`.
pub async fn fetch_comparisons(endpoint: &str, timeout: Duration) -> Result<Comparisons> {
    let client = build_client(timeout)?;
    fetch_with(&client, endpoint).await
}

/// Fetch and decode `GET <endpoint>/comparisons` with an existing client.
pub async fn fetch_with(client: &reqwest::Client, endpoint: &str) -> Result<Comparisons> {
    let url = comparisons_url(endpoint);
    debug!("Fetching comparisons from {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} returned HTTP {}", url, status);
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response from {}", url))?;

    let comparisons = Comparisons::from_json(&body)?;
    info!("Fetched {} rule-sets from {}", comparisons.len(), url);
    Ok(comparisons)
}

/// Blocking wrapper around [`fetch_comparisons`] for callers outside a runtime.
pub fn fetch_comparisons_blocking(endpoint: &str, timeout: Duration) -> Result<Comparisons> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    rt.block_on(fetch_comparisons(endpoint, timeout))
}
