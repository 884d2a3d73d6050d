//! Color and font facets
//!
//! Both scan the same sources: every inline `style` attribute in document
//! order, then the text of every `<style>` block in document order.
//! Matches are kept verbatim; deduplication happens only in the summary.

use crate::facets::select_all;
use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;

/// Color and font tokens matched on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTokens {
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
}

/// 3- or 6-digit hex, or functional `rgb()`/`rgba()` notation
fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b|rgba?\([^)]*\)")
            .expect("color pattern is a valid regex")
    })
}

/// Text after `font-family:` up to the end of the declaration
fn font_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)font-family\s*:\s*([^;}]+)").expect("font pattern is a valid regex")
    })
}

/// Extracts color and font tokens from inline style attributes and blocks
pub fn extract_style_tokens(document: &Html) -> StyleTokens {
    let root = document.root_element();

    let attributes = select_all(root, "[style]")
        .into_iter()
        .filter_map(|element| element.value().attr("style"))
        .map(str::to_string);
    let blocks = select_all(root, "style")
        .into_iter()
        .map(|block| block.text().collect::<String>());

    let mut tokens = StyleTokens::default();
    for source in attributes.chain(blocks) {
        scan(&source, &mut tokens);
    }
    tokens
}

fn scan(source: &str, tokens: &mut StyleTokens) {
    tokens.colors.extend(
        color_pattern()
            .find_iter(source)
            .map(|m| m.as_str().to_string()),
    );
    tokens.fonts.extend(
        font_pattern()
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|font| !font.is_empty()),
    );
}
