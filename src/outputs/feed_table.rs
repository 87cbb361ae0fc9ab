//! Markdown table output for tracked feed entries.
//!
//! # Output Format
//!
//! ```text
//! | Time | Title | Feed | IsNew | IsToday |
//! |------|-------|------|-------|--------|
//! | Mon, 06 Jan 2025 09:15:00 GMT | [Title](guid) | [bug-bounty](feed-url) | Yes | Yes |
//! ```

use crate::models::FeedEntry;
use crate::utils::sanitize_title;
use std::error::Error;
use std::fmt::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Render feed entries as a Markdown table, one row per entry.
pub fn render_feed_table(entries: &[FeedEntry]) -> String {
    let mut md = String::new();
    md.push_str("| Time | Title | Feed | IsNew | IsToday |\n");
    md.push_str("|------|-------|------|-------|--------|\n");

    for entry in entries {
        let _ = writeln!(
            md,
            "| {} | [{}]({}) | [{}]({}) | {} | {} |",
            entry.pub_date,
            sanitize_title(&entry.title),
            entry.guid,
            entry.feed_name,
            entry.feed_url,
            entry.is_new,
            entry.is_today
        );
    }
    md
}

/// Overwrite `path` with the feed table.
#[instrument(level = "info", skip_all, fields(path = %path.display(), entries = entries.len()))]
pub async fn write_feed_report(entries: &[FeedEntry], path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, render_feed_table(entries)).await?;
    info!("Wrote feed digest");
    Ok(())
}
