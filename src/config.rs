//! Source and output configuration passed explicitly into each stage.
//!
//! Defaults reproduce the fixed endpoints and paths of a plain run with no
//! arguments; [`crate::cli::Cli`] overrides them field by field.

use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HACKERONE_URL: &str = "https://hackerone.com/hacktivity.json";
pub const DEFAULT_BUGCROWD_URL: &str = "https://bugcrowd.com/programs.json";
pub const DEFAULT_INTIGRITI_URL: &str = "https://www.intigriti.com/researcher/bugbounty-programs";

pub const DEFAULT_FEED_URLS: [&str; 3] = [
    "https://medium.com/feed/tag/bug-bounty",
    "https://medium.com/feed/tag/security",
    "https://medium.com/feed/tag/vulnerability",
];

pub const DEFAULT_TRENDS_OUTPUT: &str = "reports/latest_trends.md";
pub const DEFAULT_FEED_OUTPUT: &str = "trends.md";
pub const DEFAULT_TOP_N: usize = 10;

/// Platform endpoints queried by the fetchers.
#[derive(Debug, Clone, PartialEq)]
pub struct Sources {
    pub hackerone: String,
    pub bugcrowd: String,
    pub intigriti: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            hackerone: DEFAULT_HACKERONE_URL.to_string(),
            bugcrowd: DEFAULT_BUGCROWD_URL.to_string(),
            intigriti: DEFAULT_INTIGRITI_URL.to_string(),
        }
    }
}

/// Settings for the RSS feed tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub urls: Vec<String>,
    pub output: PathBuf,
    /// Pause between consecutive feed requests.
    pub delay: Duration,
    /// Per-request timeout for feed fetches.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_FEED_URLS.iter().map(|u| u.to_string()).collect(),
            output: PathBuf::from(DEFAULT_FEED_OUTPUT),
            delay: Duration::from_secs(2),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sources: Sources,
    pub trends_output: PathBuf,
    pub top_n: usize,
    /// Also fetch Bugcrowd and Intigriti program listings.
    pub fetch_programs: bool,
    /// `None` when the feed tracker is disabled.
    pub feeds: Option<FeedConfig>,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let sources = Sources {
            hackerone: cli.hackerone_url.clone(),
            bugcrowd: cli.bugcrowd_url.clone(),
            intigriti: cli.intigriti_url.clone(),
        };

        let feeds = cli.feeds.then(|| {
            let defaults = FeedConfig::default();
            FeedConfig {
                urls: if cli.feed_url.is_empty() {
                    defaults.urls
                } else {
                    cli.feed_url.clone()
                },
                output: cli.feed_output.clone(),
                delay: Duration::from_secs(cli.feed_delay_secs),
                timeout: defaults.timeout,
            }
        });

        Self {
            sources,
            trends_output: cli.output.clone(),
            top_n: cli.top,
            fetch_programs: cli.programs,
            feeds,
        }
    }
}
