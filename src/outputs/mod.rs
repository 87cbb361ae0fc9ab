//! Output generation for the Markdown digests.
//!
//! # Submodules
//!
//! - [`markdown`]: Renders ranked report terms into the trends digest
//! - [`feed_table`]: Renders tracked feed entries as a Markdown table
//!
//! # Output Structure
//!
//! ```text
//! reports/
//! └── latest_trends.md   # Trend digest, overwritten each run
//! trends.md              # Feed digest (only with --feeds)
//! ```
//!
//! Both files are fully overwritten; nothing is appended across runs.

pub mod feed_table;
pub mod markdown;
