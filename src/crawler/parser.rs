//! Document parsing
//!
//! Raw markup is parsed once per page and every facet extractor runs over
//! the resulting tree. The tree is dropped before this function returns, so
//! callers only ever hold owned facet results.

use crate::facets::{Heuristics, PageFacets};
use scraper::Html;
use url::Url;

/// Parses a page and extracts all of its facets
///
/// Parsing is lenient: malformed markup still yields a (possibly sparse)
/// tree, so there is no failure path.
///
/// # Example
///
/// ```
/// use site_harvest::crawler::parse_page;
/// use site_harvest::facets::Heuristics;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let url = Url::parse("https://example.com/").unwrap();
/// let facets = parse_page(html, &url, &Heuristics::default());
/// assert_eq!(facets.content.title, "Test");
/// ```
pub fn parse_page(html: &str, page_url: &Url, heuristics: &Heuristics) -> PageFacets {
    let document = Html::parse_document(html);
    PageFacets::extract(&document, page_url, heuristics)
}
