//! Platform fetchers for bug bounty reports, program listings, and security feeds.
//!
//! Each submodule talks to exactly one kind of source and hands back plain data.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | On failure |
//! |--------|--------|--------|------------|
//! | HackerOne | [`hackerone`] | Hacktivity JSON | Empty list, logged |
//! | Bugcrowd | [`bugcrowd`] | Programs JSON | Empty on network/status; parse error propagates |
//! | Intigriti | [`intigriti`] | HTML scraping | Request error propagates |
//! | RSS feeds | [`feeds`] | RSS 2.0 XML | Feed skipped, logged |
//!
//! Fetches run one after another; nothing here spawns tasks or retries.

pub mod bugcrowd;
pub mod feeds;
pub mod hackerone;
pub mod intigriti;
