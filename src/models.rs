//! Data models for fetched platform records, ranked terms, and feed items.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Report`]: A disclosed report as returned by HackerOne's hacktivity feed
//! - [`Program`]: An opaque program listing from Bugcrowd
//! - [`TermCount`]: A title token and how often it was seen
//! - [`Rss`], [`FeedItem`]: RSS documents as parsed from security feeds
//! - [`FeedEntry`]: A feed item annotated for the feed digest table

use serde::{Deserialize, Serialize};

/// A single disclosed vulnerability report.
///
/// Only the title is used for trend extraction; every other field in the
/// upstream payload is ignored during deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Report {
    /// The report headline as published on the platform.
    pub title: String,
}

/// Top-level body of the HackerOne hacktivity endpoint.
///
/// A body without a `reports` field is treated as an empty listing.
#[derive(Debug, Default, Deserialize)]
pub struct HacktivityPage {
    #[serde(default)]
    pub reports: Vec<Report>,
}

/// A bug bounty program listing from Bugcrowd.
///
/// The payload is kept as raw JSON since nothing downstream inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct Program(pub serde_json::Value);

/// A title token paired with the number of times it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl TermCount {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Ranked terms, highest count first.
pub type TrendingList = Vec<TermCount>;

/// Root element of an RSS 2.0 document.
#[derive(Debug, Default, Deserialize)]
pub struct Rss {
    #[serde(default)]
    pub channel: Channel,
}

/// The `<channel>` element holding feed items.
#[derive(Debug, Default, Deserialize)]
pub struct Channel {
    #[serde(rename = "item", default)]
    pub items: Vec<FeedItem>,
}

/// A single `<item>` from an RSS feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub guid: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
}

/// A feed item ready to be written as one row of the feed digest.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub guid: String,
    pub pub_date: String,
    /// Short feed name, taken from the last segment of the feed URL.
    pub feed_name: String,
    pub feed_url: String,
    /// Always `"Yes"`: every run treats fetched items as new.
    pub is_new: String,
    /// `"Yes"` when published today, otherwise empty.
    pub is_today: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hacktivity_page_deserialization() {
        let json = r#"{
            "reports": [
                {"title": "SQL Injection Found", "id": 1, "severity": "high"},
                {"title": "XSS bug"}
            ],
            "next": null
        }"#;

        let page: HacktivityPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.reports.len(), 2);
        assert_eq!(page.reports[0].title, "SQL Injection Found");
    }

    #[test]
    fn test_hacktivity_page_without_reports() {
        let page: HacktivityPage = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(page.reports.is_empty());
    }

    #[test]
    fn test_report_without_title_is_rejected() {
        let result: Result<HacktivityPage, _> =
            serde_json::from_str(r#"{"reports": [{"id": 7}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_term_count_new() {
        let tc = TermCount::new("xss", 3);
        assert_eq!(tc.term, "xss");
        assert_eq!(tc.count, 3);
    }

    #[test]
    fn test_rss_deserialization() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <rss version="2.0">
              <channel>
                <title>bug-bounty on Medium</title>
                <item>
                  <title>My first P1</title>
                  <guid isPermaLink="false">https://medium.com/p/abc</guid>
                  <pubDate>Mon, 06 Jan 2025 10:00:00 GMT</pubDate>
                </item>
                <item>
                  <title>IDOR everywhere</title>
                  <guid>https://medium.com/p/def</guid>
                  <pubDate>Tue, 07 Jan 2025 11:30:00 GMT</pubDate>
                </item>
              </channel>
            </rss>"#;

        let rss: Rss = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(rss.channel.items.len(), 2);
        assert_eq!(rss.channel.items[0].title, "My first P1");
        assert_eq!(rss.channel.items[0].guid, "https://medium.com/p/abc");
        assert_eq!(rss.channel.items[1].pub_date, "Tue, 07 Jan 2025 11:30:00 GMT");
    }

    #[test]
    fn test_rss_empty_channel() {
        let xml = r#"<rss version="2.0"><channel><title>empty</title></channel></rss>"#;
        let rss: Rss = quick_xml::de::from_str(xml).unwrap();
        assert!(rss.channel.items.is_empty());
    }
}
