//! HackerOne hacktivity fetcher.
//!
//! Pulls the public [hacktivity](https://hackerone.com/hacktivity) JSON feed and
//! returns its disclosed reports. This is the only source whose data feeds the
//! trend extractor.
//!
//! Every failure (connection, status, body, JSON) degrades to an empty list so
//! the digest is still written.

use crate::config::Sources;
use crate::models::{HacktivityPage, Report};
use crate::utils::truncate_for_log;
use reqwest::{StatusCode, get};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

/// Fetch the latest disclosed reports from HackerOne.
///
/// # Returns
///
/// The reports listed under the body's `reports` field, or an empty vector if
/// the request fails, the status is not 200, or the body is not valid JSON.
#[instrument(level = "info", skip_all, fields(url = %sources.hackerone))]
pub async fn fetch_h1_reports(sources: &Sources) -> Vec<Report> {
    let url = sources.hackerone.as_str();

    let response = match get(url).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "HackerOne request failed");
            return Vec::new();
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        warn!(%status, "HackerOne returned a non-200 status");
        return Vec::new();
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Failed reading HackerOne response body");
            return Vec::new();
        }
    };

    parse_reports(&body)
}

/// Decode a hacktivity JSON body into reports.
///
/// Only a JSON object is a hacktivity page; any other top-level value, or an
/// object without `reports`, yields no reports. Invalid JSON is logged with a
/// preview of the body and yields no reports.
pub fn parse_reports(body: &str) -> Vec<Report> {
    let map = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!(
                body_preview = %truncate_for_log(&other.to_string(), 200),
                "HackerOne body is not a JSON object; no reports"
            );
            return Vec::new();
        }
        Err(e) => {
            error!(
                error = %e,
                body_preview = %truncate_for_log(body, 200),
                "Received invalid JSON from HackerOne API"
            );
            return Vec::new();
        }
    };

    match serde_json::from_value::<HacktivityPage>(Value::Object(map)) {
        Ok(page) => {
            info!(count = page.reports.len(), "Fetched HackerOne reports");
            debug!(titles = ?page.reports.iter().map(|r| &r.title).collect::<Vec<_>>(), "HackerOne titles");
            page.reports
        }
        Err(e) => {
            error!(
                error = %e,
                body_preview = %truncate_for_log(body, 200),
                "Received invalid JSON from HackerOne API"
            );
            Vec::new()
        }
    }
}
