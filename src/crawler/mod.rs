//! Crawler module for page fetching and processing
//!
//! This module contains the page-extraction pipeline, including:
//! - HTTP fetching with a fixed timeout
//! - Document parsing and facet extraction
//! - The frontier of pending pages
//! - Overall harvest coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{Harvester, PageOutcome};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub(crate) use fetcher::classify_error;
pub use frontier::Frontier;
pub use parser::parse_page;
