//! Image facet
//!
//! Collects every `<img src>` reference and resolves it against the page.
//! Downloading happens later in [`crate::assets`].

use crate::facets::select_all;
use crate::url::resolve_reference;
use scraper::Html;
use url::Url;

/// An image reference found on a page, ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Absolute URL the image is fetched from
    pub remote_url: Url,
    /// `alt` attribute, empty when missing
    pub alt_text: String,
    /// `src` attribute as authored
    pub original_src: String,
}

/// Extracts image references in document order
///
/// References that cannot be resolved to an absolute URL are logged and
/// skipped.
pub fn extract_image_refs(document: &Html, page_url: &Url) -> Vec<ImageRef> {
    select_all(document.root_element(), "img[src]")
        .into_iter()
        .filter_map(|img| {
            let src = img.value().attr("src").unwrap_or_default();
            match resolve_reference(page_url, src) {
                Ok(remote_url) => Some(ImageRef {
                    remote_url,
                    alt_text: img.value().attr("alt").unwrap_or_default().to_string(),
                    original_src: src.to_string(),
                }),
                Err(e) => {
                    tracing::warn!("Skipping image: {}", e);
                    None
                }
            }
        })
        .collect()
}
