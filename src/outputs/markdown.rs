//! Markdown rendering for the trending-terms digest.

use crate::models::TrendingList;
use std::error::Error;
use std::fmt::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

const HEADER: &str = "# 🔥 Trending Bug Bounty Vulnerabilities\n\n";
const SUBHEADING: &str = "**Latest insights from bug bounty reports:**\n\n";
const CLOSING: &str = "\n\n📌 Stay ahead of new vulnerabilities! 🚀";

/// Render ranked terms into the digest template.
///
/// One bullet per term, in list order. An empty list still produces the
/// header, subheading, and closing line.
pub fn render_markdown(trending: &TrendingList) -> String {
    let mut md = String::from(HEADER);
    md.push_str(SUBHEADING);

    for tc in trending {
        // Writing into a String cannot fail.
        let _ = writeln!(md, "- **{}** ({} reports)", tc.term, tc.count);
    }

    md.push_str(CLOSING);
    md
}

/// Render the digest and overwrite `path` with it.
///
/// Parent directories are not created; a missing directory is returned as
/// an error.
#[instrument(level = "info", skip_all, fields(path = %path.display(), terms = trending.len()))]
pub async fn generate_markdown_report(
    trending: &TrendingList,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let md = render_markdown(trending);
    fs::write(path, md).await?;
    info!("Wrote trends Markdown");
    Ok(())
}
