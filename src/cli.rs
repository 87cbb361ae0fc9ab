//! Command-line interface definitions for Bounty Trends.
//!
//! Every option has a default matching a plain run, so invoking the binary with
//! no arguments fetches HackerOne and writes `reports/latest_trends.md`.
//! Options can also be supplied via environment variables.

use crate::config::{
    DEFAULT_BUGCROWD_URL, DEFAULT_FEED_OUTPUT, DEFAULT_HACKERONE_URL, DEFAULT_INTIGRITI_URL,
    DEFAULT_TOP_N, DEFAULT_TRENDS_OUTPUT,
};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Bounty Trends application.
///
/// # Examples
///
/// ```sh
/// # Default run: HackerOne trend digest only
/// bounty_trends
///
/// # Also pull program listings and the Medium security feeds
/// bounty_trends --programs --feeds
///
/// # Top 20 terms into a custom file
/// bounty_trends --top 20 -o out/trends.md
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the trend digest (overwritten each run; directory must exist)
    #[arg(short, long, env = "TRENDS_OUTPUT", default_value = DEFAULT_TRENDS_OUTPUT)]
    pub output: PathBuf,

    /// Number of top terms to keep
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// HackerOne hacktivity JSON endpoint
    #[arg(long, env = "HACKERONE_URL", default_value = DEFAULT_HACKERONE_URL)]
    pub hackerone_url: String,

    /// Bugcrowd programs JSON endpoint
    #[arg(long, env = "BUGCROWD_URL", default_value = DEFAULT_BUGCROWD_URL)]
    pub bugcrowd_url: String,

    /// Intigriti programs HTML page
    #[arg(long, env = "INTIGRITI_URL", default_value = DEFAULT_INTIGRITI_URL)]
    pub intigriti_url: String,

    /// Also fetch Bugcrowd and Intigriti program listings
    #[arg(long)]
    pub programs: bool,

    /// Track RSS security feeds and write the feed digest
    #[arg(long)]
    pub feeds: bool,

    /// RSS feed URL to track (repeatable; defaults to the Medium security tags)
    #[arg(long)]
    pub feed_url: Vec<String>,

    /// Path of the feed digest
    #[arg(long, env = "FEED_OUTPUT", default_value = DEFAULT_FEED_OUTPUT)]
    pub feed_output: PathBuf,

    /// Seconds to wait between feed requests
    #[arg(long, default_value_t = 2)]
    pub feed_delay_secs: u64,
}
