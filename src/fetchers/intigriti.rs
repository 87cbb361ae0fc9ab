//! Intigriti program listing scraper.
//!
//! Intigriti has no public JSON listing, so program names are scraped from the
//! researcher programs page. If the markup changes the result is simply empty.

use crate::config::Sources;
use reqwest::get;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

/// CSS selector for program name elements on the listing page.
pub const PROGRAM_TITLE_SELECTOR: &str = ".program-card__title";

/// Fetch active program names from Intigriti.
///
/// The response status is not checked. A request failure is returned to the
/// caller as an error.
#[instrument(level = "info", skip_all, fields(url = %sources.intigriti))]
pub async fn fetch_intigriti_programs(sources: &Sources) -> Result<Vec<String>, Box<dyn Error>> {
    let html = get(sources.intigriti.as_str()).await?.text().await?;
    let programs = parse_program_names(&html)?;

    info!(count = programs.len(), "Scraped Intigriti programs");
    debug!(?programs, "Intigriti programs");
    Ok(programs)
}

/// Extract trimmed program names from an Intigriti listing page.
pub fn parse_program_names(html: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(PROGRAM_TITLE_SELECTOR)?;

    let names = document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect();
    Ok(names)
}
