//! Bugcrowd program listing fetcher.
//!
//! Downloads the public programs JSON. Programs are kept opaque; nothing
//! downstream reads their fields yet.

use crate::config::Sources;
use crate::models::Program;
use reqwest::{StatusCode, get};
use serde_json::Value;
use std::error::Error;
use tracing::{info, instrument, warn};

/// Fetch active programs from Bugcrowd.
///
/// Connection failures and non-200 responses yield an empty list. A body that
/// is not valid JSON is returned as an error.
#[instrument(level = "info", skip_all, fields(url = %sources.bugcrowd))]
pub async fn fetch_bugcrowd_programs(sources: &Sources) -> Result<Vec<Program>, Box<dyn Error>> {
    let response = match get(sources.bugcrowd.as_str()).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Bugcrowd request failed");
            return Ok(Vec::new());
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        warn!(%status, "Bugcrowd returned a non-200 status");
        return Ok(Vec::new());
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Failed reading Bugcrowd response body");
            return Ok(Vec::new());
        }
    };

    let programs = parse_programs(&body)?;
    info!(count = programs.len(), "Fetched Bugcrowd programs");
    Ok(programs)
}

/// Split a Bugcrowd JSON body into programs.
///
/// A top-level array yields one program per element; any other value is a
/// single program.
pub fn parse_programs(body: &str) -> Result<Vec<Program>, serde_json::Error> {
    let programs = match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => items.into_iter().map(Program).collect(),
        other => vec![Program(other)],
    };
    Ok(programs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::test_server::{closed_port_url, serve_once};
    use serde_json::json;

    fn sources_for(bugcrowd: String) -> Sources {
        Sources {
            bugcrowd,
            ..Sources::default()
        }
    }

    #[test]
    fn test_parse_programs_array() {
        let programs = parse_programs(r#"[{"name": "Acme"}, {"name": "Globex"}]"#).unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0], Program(json!({"name": "Acme"})));
    }

    #[test]
    fn test_parse_programs_object() {
        let programs = parse_programs(r#"{"programs": [], "meta": {"total": 0}}"#).unwrap();
        assert_eq!(programs.len(), 1);
    }

    #[test]
    fn test_parse_programs_invalid() {
        assert!(parse_programs("not json").is_err());
    }

    #[tokio::test]
    async fn test_fetch_bugcrowd_programs_ok() {
        let url = serve_once(200, r#"[{"name": "Acme"}]"#);
        let programs = fetch_bugcrowd_programs(&sources_for(url)).await.unwrap();
        assert_eq!(programs, vec![Program(json!({"name": "Acme"}))]);
    }

    #[tokio::test]
    async fn test_fetch_bugcrowd_programs_non_200_is_empty() {
        let url = serve_once(404, "not found");
        let programs = fetch_bugcrowd_programs(&sources_for(url)).await.unwrap();
        assert!(programs.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_bugcrowd_programs_invalid_json_errors() {
        let url = serve_once(200, "<html>maintenance</html>");
        let result = fetch_bugcrowd_programs(&sources_for(url)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_bugcrowd_programs_connection_error_is_empty() {
        let programs = fetch_bugcrowd_programs(&sources_for(closed_port_url()))
            .await
            .unwrap();
        assert!(programs.is_empty());
    }
}
