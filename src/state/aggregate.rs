//! Run-wide aggregate of every facet result
//!
//! Facet extractors never touch the aggregate. Each page produces an owned
//! [`PageExtraction`] which is folded in through [`Aggregate::merge`], the
//! only mutation point besides the visited registry.

use crate::assets::{CssAsset, ImageAsset};
use crate::facets::{PageContent, PageStructure};
use std::collections::{BTreeMap, HashSet};

/// Everything harvested from one successfully fetched page
#[derive(Debug, Clone)]
pub struct PageExtraction {
    /// Visited-registry key of the page
    pub key: String,
    pub content: PageContent,
    pub structure: PageStructure,
    pub images: Vec<ImageAsset>,
    pub css: Vec<CssAsset>,
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
}

/// In-memory collection of all facet results for one run
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    visited: HashSet<String>,
    /// Visited keys in the order they were first attempted
    visit_order: Vec<String>,
    text_content: BTreeMap<String, PageContent>,
    structure: BTreeMap<String, PageStructure>,
    images: Vec<ImageAsset>,
    css: Vec<CssAsset>,
    colors: Vec<String>,
    fonts: Vec<String>,
}

impl Aggregate {
    /// Records a page as attempted
    ///
    /// Returns false if the page was already in the registry.
    pub fn mark_visited(&mut self, key: &str) -> bool {
        if self.visited.insert(key.to_string()) {
            self.visit_order.push(key.to_string());
            true
        } else {
            false
        }
    }

    pub fn is_visited(&self, key: &str) -> bool {
        self.visited.contains(key)
    }

    /// Folds one page's results into the aggregate
    ///
    /// The page is marked visited if it was not already. A page whose
    /// content is already present is left untouched, so merging is
    /// idempotent per URL. Returns true if the page was merged.
    pub fn merge(&mut self, page: PageExtraction) -> bool {
        if self.text_content.contains_key(&page.key) {
            tracing::debug!("Page {} already merged, ignoring", page.key);
            return false;
        }

        self.mark_visited(&page.key);
        self.images.extend(page.images);
        self.css.extend(page.css);
        self.colors.extend(page.colors);
        self.fonts.extend(page.fonts);
        self.structure.insert(page.key.clone(), page.structure);
        self.text_content.insert(page.key, page.content);
        true
    }

    /// Attempted pages in visit order
    pub fn visited_urls(&self) -> &[String] {
        &self.visit_order
    }

    /// Attempted pages that produced no content
    pub fn failed_urls(&self) -> Vec<String> {
        self.visit_order
            .iter()
            .filter(|key| !self.text_content.contains_key(*key))
            .cloned()
            .collect()
    }

    pub fn text_content(&self) -> &BTreeMap<String, PageContent> {
        &self.text_content
    }

    pub fn structure(&self) -> &BTreeMap<String, PageStructure> {
        &self.structure
    }

    pub fn images(&self) -> &[ImageAsset] {
        &self.images
    }

    pub fn css(&self) -> &[CssAsset] {
        &self.css
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }
}
