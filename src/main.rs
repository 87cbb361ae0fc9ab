//! # Bounty Trends
//!
//! Polls bug bounty platforms, ranks the most frequent words in disclosed
//! report titles, and writes a Markdown digest of the top terms.
//!
//! ## Features
//!
//! - Pulls disclosed reports from HackerOne's hacktivity feed
//! - Ranks title keywords by raw frequency (top 10 by default)
//! - Writes `reports/latest_trends.md`, overwriting the previous run
//! - Optionally pulls Bugcrowd and Intigriti program listings (`--programs`)
//! - Optionally tracks security RSS feeds into a table digest (`--feeds`)
//!
//! ## Usage
//!
//! ```sh
//! bounty_trends
//! bounty_trends --programs --feeds --top 20
//! ```
//!
//! ## Architecture
//!
//! One sequential pass, each stage handing plain data to the next:
//! 1. **Fetching**: Download reports (and optionally programs) from each platform
//! 2. **Extraction**: Count title tokens and keep the top N
//! 3. **Output**: Render the Markdown digest and overwrite the output file
//! 4. **Feeds**: Optionally fetch RSS feeds and write the feed table

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod fetchers;
mod models;
mod outputs;
mod trends;
mod utils;

use cli::Cli;
use config::Config;
use fetchers::{bugcrowd, feeds, hackerone, intigriti};
use outputs::{feed_table, markdown};

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("Fetching and analyzing bug bounty trends");

    let args = Cli::parse();
    let config = Config::from(&args);
    debug!(?config, "Resolved configuration");

    // ---- Reports → trends → digest ----
    let reports = hackerone::fetch_h1_reports(&config.sources).await;
    let trending = trends::extract_trends(&reports, config.top_n);
    info!(
        reports = reports.len(),
        terms = trending.len(),
        "Extracted trending terms"
    );

    markdown::generate_markdown_report(&trending, &config.trends_output).await?;
    info!(path = %config.trends_output.display(), "Trends saved");

    // ---- Program listings (fetched, not analyzed) ----
    if config.fetch_programs {
        let bugcrowd_programs = bugcrowd::fetch_bugcrowd_programs(&config.sources).await?;
        let intigriti_programs = intigriti::fetch_intigriti_programs(&config.sources).await?;
        info!(
            bugcrowd = bugcrowd_programs.len(),
            intigriti = intigriti_programs.len(),
            "Fetched program listings"
        );
    }

    // ---- Feed digest ----
    if let Some(ref feed_config) = config.feeds {
        let today = Local::now().date_naive();
        let entries = feeds::track_feeds(feed_config, today).await?;
        if let Err(e) = feed_table::write_feed_report(&entries, &feed_config.output).await {
            error!(path = %feed_config.output.display(), error = %e, "Failed writing feed digest");
        } else {
            info!(path = %feed_config.output.display(), entries = entries.len(), "Feed digest saved");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
