//! Facet extractors
//!
//! Each facet is a pure function from a parsed document (and the page URL)
//! to its own result type:
//! - Text/DOM: title, headings, paragraphs, links, buttons, navigation, footer
//! - Images: resolved `<img>` references
//! - Stylesheets: linked stylesheet URLs and inline `<style>` blocks
//! - Styles: color and font tokens
//! - Structure: classed sections and forms
//!
//! Nothing here touches the network or the file system.

pub mod heuristics;
pub mod images;
pub mod structure;
pub mod styles;
pub mod stylesheets;
pub mod text;

pub use heuristics::{
    ClassPatternNavigation, Heuristics, LabelHeuristic, NavigationHeuristic, PrecedingLabel,
};
pub use images::{extract_image_refs, ImageRef};
pub use structure::{extract_structure, FieldInfo, FormInfo, PageStructure, SectionInfo};
pub use styles::{extract_style_tokens, StyleTokens};
pub use stylesheets::{extract_stylesheets, StylesheetRefs};
pub use text::{extract_text, FooterInfo, LinkRef, NavGroup, PageContent};

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Every facet of one page, computed from a single parse
#[derive(Debug, Clone)]
pub struct PageFacets {
    pub content: PageContent,
    pub images: Vec<ImageRef>,
    pub stylesheets: StylesheetRefs,
    pub styles: StyleTokens,
    pub structure: PageStructure,
}

impl PageFacets {
    /// Runs every facet extractor against one parsed document
    pub fn extract(document: &Html, page_url: &Url, heuristics: &Heuristics) -> Self {
        let facets = Self {
            content: extract_text(document, page_url, heuristics.navigation.as_ref()),
            images: extract_image_refs(document, page_url),
            stylesheets: extract_stylesheets(document, page_url),
            styles: extract_style_tokens(document),
            structure: extract_structure(
                document,
                page_url,
                heuristics.labels.as_ref(),
                heuristics.preview_length,
            ),
        };

        tracing::debug!(
            "{}: {} links, {} images, {} stylesheets, {} inline styles, {} colors, {} fonts, {} sections, {} forms",
            page_url,
            facets.content.links.len(),
            facets.images.len(),
            facets.stylesheets.linked.len(),
            facets.stylesheets.inline.len(),
            facets.styles.colors.len(),
            facets.styles.fonts.len(),
            facets.structure.sections.len(),
            facets.structure.forms.len()
        );

        facets
    }

    /// Sets the page URL recorded in the content and structure facets
    ///
    /// Facets are extracted against the URL a page was served from. After a
    /// redirect that differs from the URL the page was requested as.
    pub fn relabel(&mut self, page_url: &str) {
        self.content.url = page_url.to_string();
        self.structure.url = page_url.to_string();
    }
}

/// Elements below `root` matching a CSS selector, in document order
pub(crate) fn select_all<'a>(root: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => root.select(&selector).collect(),
        Err(e) => {
            tracing::error!("Invalid selector '{}': {:?}", css, e);
            Vec::new()
        }
    }
}

/// Whitespace-trimmed text fragments of an element joined by single spaces
pub(crate) fn flatten_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
