//! Stylesheet facet
//!
//! Linked stylesheets are resolved for download; inline `<style>` blocks
//! are kept verbatim for numbered local files.

use crate::facets::select_all;
use crate::url::resolve_reference;
use scraper::Html;
use url::Url;

/// Stylesheets referenced or embedded by one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetRefs {
    /// Absolute URLs of `<link rel="stylesheet">` targets
    pub linked: Vec<Url>,
    /// Raw text of every `<style>` block in document order
    pub inline: Vec<String>,
}

/// Extracts linked and inline stylesheets
pub fn extract_stylesheets(document: &Html, page_url: &Url) -> StylesheetRefs {
    let root = document.root_element();

    let linked = select_all(root, r#"link[rel~="stylesheet"][href]"#)
        .into_iter()
        .filter_map(|link| {
            let href = link.value().attr("href").unwrap_or_default();
            resolve_reference(page_url, href)
                .map_err(|e| tracing::warn!("Skipping stylesheet: {}", e))
                .ok()
        })
        .collect();

    let inline = select_all(root, "style")
        .into_iter()
        .map(|style| style.text().collect::<String>())
        .collect();

    StylesheetRefs { linked, inline }
}
