//! Text/DOM facet
//!
//! Title, headings, paragraphs, links, buttons, navigation groups and
//! footer of one page.

use crate::facets::heuristics::NavigationHeuristic;
use crate::facets::{flatten_text, select_all};
use crate::url::{resolve_page_link, same_site};
use serde::{Deserialize, Serialize};
use scraper::{ElementRef, Html};
use std::collections::{BTreeMap, HashSet};
use url::Url;

/// Heading levels captured by the text facet
pub const HEADING_LEVELS: [&str; 3] = ["h1", "h2", "h3"];

/// An anchor as authored on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub text: String,
    /// Raw `href` value; not resolved
    pub href: String,
}

/// Links drawn from one navigation-like container
pub type NavGroup = Vec<LinkRef>;

/// Text and links of the first footer element
///
/// Serializes as an empty object when the page has no footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkRef>,
}

impl FooterInfo {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.links.is_empty()
    }
}

/// Textual content of one successfully fetched page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub url: String,
    /// Empty when the document has no `<title>`
    pub title: String,
    /// Heading tag (`h1`..`h3`) to heading texts in document order
    pub headings: BTreeMap<String, Vec<String>>,
    pub paragraphs: Vec<String>,
    pub links: Vec<LinkRef>,
    pub buttons: Vec<String>,
    pub navigation: Vec<NavGroup>,
    pub footer: FooterInfo,
}

impl PageContent {
    /// Followable same-site pages linked from this page, first occurrence first
    pub fn same_site_links(&self, page_url: &Url) -> Vec<Url> {
        let mut seen = HashSet::new();

        self.links
            .iter()
            .filter_map(|link| resolve_page_link(page_url, &link.href))
            .filter(|url| same_site(url, page_url))
            .filter(|url| seen.insert(url.to_string()))
            .collect()
    }
}

/// Extracts the text/DOM facet of a parsed document
pub fn extract_text(
    document: &Html,
    page_url: &Url,
    navigation: &dyn NavigationHeuristic,
) -> PageContent {
    let root = document.root_element();

    let headings = HEADING_LEVELS
        .iter()
        .map(|level| (level.to_string(), texts_of(root, level)))
        .collect();

    PageContent {
        url: page_url.to_string(),
        title: extract_title(document),
        headings,
        paragraphs: texts_of(root, "p"),
        links: anchors_in(root),
        buttons: extract_buttons(root),
        navigation: navigation.navigation_groups(document),
        footer: extract_footer(root),
    }
}

/// Text of the first `<title>` element, or an empty string
fn extract_title(document: &Html) -> String {
    select_all(document.root_element(), "title")
        .into_iter()
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn texts_of(root: ElementRef<'_>, css: &str) -> Vec<String> {
    select_all(root, css).into_iter().map(flatten_text).collect()
}

/// Every anchor with an `href` below `container`, in document order
pub(crate) fn anchors_in(container: ElementRef<'_>) -> Vec<LinkRef> {
    select_all(container, "a[href]")
        .into_iter()
        .map(|anchor| LinkRef {
            text: flatten_text(anchor),
            href: anchor.value().attr("href").unwrap_or_default().to_string(),
        })
        .collect()
}

/// `<button>` text, or the `value` of a submit input that has no text
fn extract_buttons(root: ElementRef<'_>) -> Vec<String> {
    select_all(root, r#"button, input[type="submit"]"#)
        .into_iter()
        .map(|button| {
            let text = flatten_text(button);
            if text.is_empty() {
                button
                    .value()
                    .attr("value")
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            } else {
                text
            }
        })
        .collect()
}

fn extract_footer(root: ElementRef<'_>) -> FooterInfo {
    match select_all(root, "footer").into_iter().next() {
        Some(footer) => FooterInfo {
            text: flatten_text(footer),
            links: anchors_in(footer),
        },
        None => FooterInfo::default(),
    }
}
