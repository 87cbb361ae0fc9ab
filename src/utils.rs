//! Utility functions for string manipulation and date checks.
//!
//! This module provides helper functions used throughout the application:
//! - String truncation for logging response bodies
//! - Markdown-safe title sanitization for the feed digest
//! - Feed naming from URLs
//! - Publication date classification

use chrono::{DateTime, NaiveDate};
use tracing::warn;

/// Longest feed title (in characters) kept in the feed digest.
pub const MAX_TITLE_LENGTH: usize = 65;

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Make a feed title safe to place inside a Markdown table link.
///
/// Line breaks become spaces, and `|`, `[`, `]` are backslash-escaped.
/// Results longer than [`MAX_TITLE_LENGTH`] characters are cut and suffixed
/// with `...`.
pub fn sanitize_title(title: &str) -> String {
    let escaped = title
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
        .replace('[', "\\[")
        .replace(']', "\\]");

    match escaped.char_indices().nth(MAX_TITLE_LENGTH) {
        None => escaped,
        Some((cut, _)) => format!("{}...", &escaped[..cut]),
    }
}

/// Short display name for a feed: the last `/`-separated part of its URL.
///
/// `https://medium.com/feed/tag/bug-bounty` becomes `bug-bounty`. The part is
/// taken verbatim, so a query string stays attached (`security?src=rss`).
pub fn feed_name(feed_url: &str) -> String {
    feed_url.rsplit('/').next().unwrap_or(feed_url).to_string()
}

/// `"Yes"` when an RFC 1123 publication date falls on `today`, otherwise empty.
///
/// The calendar date is taken in the offset the timestamp was published with.
/// Unparseable dates are logged and treated as not today.
pub fn is_today(pub_date: &str, today: NaiveDate) -> String {
    match DateTime::parse_from_rfc2822(pub_date.trim()) {
        Ok(published) if published.date_naive() == today => "Yes".to_string(),
        Ok(_) => String::new(),
        Err(e) => {
            warn!(%pub_date, error = %e, "Error parsing publication date");
            String::new()
        }
    }
}
