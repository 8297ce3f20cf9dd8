// src/collect/mod.rs
pub mod extract;
pub mod fallback;
pub mod fetch;

use reqwest::Client;
use tracing::warn;

use crate::config::SourceConfig;
use crate::model::{Collected, RfpRecord};

/// Collect listings for one source. Total: every live-path failure
/// (transport fault, non-success status, selectors matching nothing) is
/// absorbed here and the sample table substituted, so callers never handle
/// an error. The keyword filter narrows live results only; the fallback
/// list is returned whole.
pub async fn collect(client: &Client, source: &SourceConfig) -> Collected {
    match collect_live(client, source).await {
        Ok(records) => Collected::Live(records),
        Err(e) => {
            warn!(
                error = ?e,
                source = %source.label,
                "live collection failed; substituting sample data"
            );
            Collected::Fallback(fallback::sample_records(source))
        }
    }
}

async fn collect_live(
    client: &Client,
    source: &SourceConfig,
) -> anyhow::Result<Vec<RfpRecord>> {
    let body = fetch::fetch_page(client, &source.url).await?;
    let rules = extract::rules_for(&source.id);
    let mut records = extract::extract_records(&body, source, rules);
    if records.is_empty() {
        // Markup changed, or we hit an error page with a 200 status.
        anyhow::bail!("no listings matched the extraction rules");
    }
    if !source.keywords.is_empty() {
        records.retain(|r| keyword_match(r, &source.keywords));
    }
    Ok(records)
}

/// Case-insensitive substring test of any keyword against title+description.
pub fn keyword_match(record: &RfpRecord, keywords: &[String]) -> bool {
    let haystack = format!("{} {}", record.title, record.description).to_lowercase();
    keywords.iter().any(|k| haystack.contains(&k.to_lowercase()))
}
