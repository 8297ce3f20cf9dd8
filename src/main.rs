//! RFP Gathering Tool — Binary Entrypoint
//! Runs one full collection cycle: collect from every configured source,
//! print the console summary, write the JSON document.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rfp_gatherer::collect::fetch;
use rfp_gatherer::config::Config;
use rfp_gatherer::report;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rfp_gatherer=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::load_default()?;
    let client = fetch::build_client()?;

    let result = report::run(&client, &config).await;
    println!("{}", report::summarize(&result));

    let path = Path::new(&config.output_file);
    report::persist(&result, path)?;
    println!("\nRFP data saved to {}", path.display());

    Ok(())
}
