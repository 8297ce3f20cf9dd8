// src/report.rs
//
// Aggregation and reporting: run every configured collector in order,
// render the console summary, persist the JSON document.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::collect;
use crate::config::Config;
use crate::model::CollectionResult;

/// One full collection cycle: `collect` once per configured source, in
/// configured order, results concatenated in that order. No parallelism,
/// no retries, no dedup.
pub async fn run(client: &Client, config: &Config) -> CollectionResult {
    let mut rfps = Vec::new();
    for source in &config.sources {
        info!(source = %source.label, url = %source.url, "collecting");
        let collected = collect::collect(client, source).await;
        info!(
            source = %source.label,
            count = collected.records().len(),
            fallback = collected.is_fallback(),
            "source done"
        );
        rfps.extend(collected.into_records());
    }
    CollectionResult::new(rfps)
}

/// Human-readable summary, ordered as `rfps`.
pub fn summarize(result: &CollectionResult) -> String {
    let rule = "=".repeat(80);
    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "RFP GATHERING SUMMARY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total RFPs Found: {}\n", result.total_rfps);

    for (i, rfp) in result.rfps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, rfp.title);
        let _ = writeln!(out, "   Agency: {}", rfp.agency);
        let _ = writeln!(out, "   Posted: {} | Due: {}", rfp.posted_date, rfp.due_date);
        let _ = writeln!(out, "   Notice ID: {}", rfp.notice_id);
        let _ = writeln!(out, "   Source: {}", rfp.source);
        let _ = writeln!(out, "   URL: {}\n", rfp.url);
    }

    out.push_str(&rule);
    out
}

/// Overwrite the output document at `path`. This is the one failure that
/// propagates out of the run: there is no meaningful fallback for "cannot
/// persist results".
pub fn persist(result: &CollectionResult, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(result).context("serializing collection result")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), total = result.total_rfps, "rfp data saved");
    Ok(())
}
