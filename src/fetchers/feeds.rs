//! RSS feed tracker for security write-ups.
//!
//! Fetches each configured RSS 2.0 feed in turn (Medium tag feeds by default)
//! and flattens the items into [`FeedEntry`] rows for the feed digest. A feed
//! that fails to load is logged and skipped; the rest still make it into the
//! digest.

use crate::config::FeedConfig;
use crate::models::{FeedEntry, Rss};
use crate::utils::{feed_name, is_today};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode};
use std::error::Error;
use tokio::time::sleep;
use tracing::{error, info, instrument};

/// Fetch and parse a single RSS feed.
///
/// # Errors
///
/// Returns an error naming `url` if the request fails, the status is not 200,
/// the body can't be read, or the XML does not parse.
#[instrument(level = "info", skip(client))]
pub async fn fetch_feed(client: &Client, url: &str) -> Result<Rss, Box<dyn Error>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Error fetching URL {url}: {e}"))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(format!("Received status {} from {url}", status.as_u16()).into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Error reading response from {url}: {e}"))?;

    let rss = quick_xml::de::from_str::<Rss>(&body)
        .map_err(|e| format!("Error parsing XML from {url}: {e}"))?;
    Ok(rss)
}

/// Turn a parsed feed into digest rows.
pub fn entries_from_feed(feed_url: &str, rss: Rss, today: NaiveDate) -> Vec<FeedEntry> {
    let name = feed_name(feed_url);
    rss.channel
        .items
        .into_iter()
        .map(|item| FeedEntry {
            is_today: is_today(&item.pub_date, today),
            title: item.title,
            guid: item.guid,
            pub_date: item.pub_date,
            feed_name: name.clone(),
            feed_url: feed_url.to_string(),
            is_new: "Yes".to_string(),
        })
        .collect()
}

/// Fetch every configured feed sequentially and collect their entries.
///
/// Waits `config.delay` between consecutive feeds. Entries keep feed order,
/// then item order within each feed.
#[instrument(level = "info", skip_all, fields(feeds = config.urls.len()))]
pub async fn track_feeds(
    config: &FeedConfig,
    today: NaiveDate,
) -> Result<Vec<FeedEntry>, Box<dyn Error>> {
    let client = Client::builder().timeout(config.timeout).build()?;
    let client = &client;
    let delay = config.delay;

    let per_feed: Vec<Vec<FeedEntry>> = stream::iter(config.urls.iter().enumerate())
        .then(move |(i, url)| async move {
            if i > 0 && !delay.is_zero() {
                sleep(delay).await;
            }
            match fetch_feed(client, url).await {
                Ok(rss) => {
                    let entries = entries_from_feed(url, rss, today);
                    info!(%url, count = entries.len(), "Fetched feed items");
                    entries
                }
                Err(e) => {
                    error!(error = %e, %url, "Feed fetch failed; skipping");
                    Vec::new()
                }
            }
        })
        .collect()
        .await;

    let entries: Vec<FeedEntry> = per_feed.into_iter().flatten().collect();
    info!(count = entries.len(), "Collected feed entries");
    Ok(entries)
}
