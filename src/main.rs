use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use runway_scraper::config::Config;
use runway_scraper::infra::clock::SystemClock;
use runway_scraper::infra::http_client::ReqwestHttp;
use runway_scraper::infra::output::persist_to_json;
use runway_scraper::logging;
use runway_scraper::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "runway_scraper")]
#[command(about = "Scrape upcoming Runway Playa Vista events into a JSON document")]
#[command(version)]
struct Cli {
    /// TOML config file (defaults to ./runway_scraper.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the JSON document
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pause between detail page requests, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(output) = cli.output {
        config.output_file = output;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay_ms = delay_ms;
    }

    let http = Arc::new(ReqwestHttp::new(&config).context("building HTTP client")?);
    let pipeline = Pipeline::from_config(&config, http, Arc::new(SystemClock))
        .context("building pipeline")?;

    let summary = pipeline.run().await;
    if summary.records.is_empty() {
        warn!("No events scraped; nothing written");
        println!("No events found to scrape details for.");
        return Ok(());
    }

    persist_to_json(&summary.records, &config.output_file).with_context(|| {
        format!("writing events to {}", config.output_file.display())
    })?;
    info!("💾 Saved {} events to {}", summary.records.len(), config.output_file.display());
    println!("Detailed events saved to {}", config.output_file.display());

    Ok(())
}
