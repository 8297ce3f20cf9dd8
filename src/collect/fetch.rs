// src/collect/fetch.rs
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;

/// Browser-looking user-agent; some procurement sites refuse requests
/// without one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const TIMEOUT: Duration = Duration::from_secs(30);

/// One shared client for the whole run, built at startup.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .context("building http client")
}

/// GET the listing page, returning the body only for a successful status.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        bail!("http status {}", status.as_u16());
    }
    resp.text().await.context("reading listing page body")
}
