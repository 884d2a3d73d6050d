//! Output generation module
//!
//! This module handles persisting harvest results:
//! - Per-page markup snapshots, content and structure records
//! - Numbered inline stylesheet files
//! - The run summary (JSON) and its console report

mod report;
mod summary;
mod writer;

pub use report::print_summary;
pub use summary::{unique_in_order, Summary};
pub use writer::{OutputLayout, CATEGORY_DIRS, SUMMARY_FILE};
