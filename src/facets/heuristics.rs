//! Best-effort DOM heuristics
//!
//! Navigation detection and form label lookup have no reliable semantic
//! signal in arbitrary markup. Each rule lives behind a trait so it can be
//! swapped or tuned without touching download or persistence logic.

use crate::config::HeuristicConfig;
use crate::facets::text::{anchors_in, NavGroup};
use crate::facets::{flatten_text, select_all};
use crate::ConfigError;
use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html};

/// Finds groups of navigation links in a document
pub trait NavigationHeuristic: Send + Sync {
    /// Returns navigation groups in document order; empty groups are omitted
    fn navigation_groups(&self, document: &Html) -> Vec<NavGroup>;
}

/// Finds the human-readable label of a form field
pub trait LabelHeuristic: Send + Sync {
    /// Returns the label text associated with `field`, if any
    fn label_for(&self, document: &Html, field: ElementRef<'_>) -> Option<String>;
}

/// Containers whose class attribute matches a pattern
///
/// Candidate containers are `<nav>`, `<ul>` and `<ol>` elements carrying a
/// class attribute. Only the first `limit` matching containers are
/// inspected, before empty groups are dropped.
#[derive(Debug, Clone)]
pub struct ClassPatternNavigation {
    pattern: Regex,
    limit: usize,
}

impl ClassPatternNavigation {
    pub const DEFAULT_PATTERN: &'static str = "nav|menu";
    pub const DEFAULT_LIMIT: usize = 3;

    /// Builds the heuristic from a case-insensitive pattern
    pub fn new(pattern: &str, limit: usize) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern, limit })
    }
}

impl Default for ClassPatternNavigation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATTERN, Self::DEFAULT_LIMIT)
            .expect("default navigation pattern is a valid regex")
    }
}

impl NavigationHeuristic for ClassPatternNavigation {
    fn navigation_groups(&self, document: &Html) -> Vec<NavGroup> {
        select_all(document.root_element(), "nav[class], ul[class], ol[class]")
            .into_iter()
            .filter(|container| {
                container
                    .value()
                    .attr("class")
                    .is_some_and(|class| self.pattern.is_match(class))
            })
            .take(self.limit)
            .map(anchors_in)
            .filter(|group| !group.is_empty())
            .collect()
    }
}

/// Nearest `<label>` that opens before the field in document order
///
/// This is positional, not `for`-attribute based: a label wrapping the
/// field is found, but so is an unrelated label earlier in the page.
///
/// The search walks backwards from the field: preceding siblings (deepest
/// last label first), then the parent itself, then the parent's preceding
/// siblings, up to the root. Only the part of the document before the
/// field is visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecedingLabel;

impl LabelHeuristic for PrecedingLabel {
    fn label_for(&self, _document: &Html, field: ElementRef<'_>) -> Option<String> {
        let mut current = *field;

        loop {
            for sibling in current.prev_siblings() {
                let nearest = sibling
                    .descendants()
                    .filter_map(ElementRef::wrap)
                    .filter(is_label)
                    .last();
                if let Some(label) = nearest {
                    return Some(flatten_text(label));
                }
            }

            current = current.parent()?;
            if let Some(label) = ElementRef::wrap(current).filter(is_label) {
                return Some(flatten_text(label));
            }
        }
    }
}

fn is_label(element: &ElementRef<'_>) -> bool {
    element.value().name() == "label"
}

/// The heuristic strategies used by one harvest run
pub struct Heuristics {
    pub navigation: Box<dyn NavigationHeuristic>,
    pub labels: Box<dyn LabelHeuristic>,
    /// Number of characters kept in section text previews
    pub preview_length: usize,
}

impl Heuristics {
    /// Builds the default strategies tuned by configuration
    pub fn from_config(config: &HeuristicConfig) -> Result<Self, ConfigError> {
        let navigation =
            ClassPatternNavigation::new(&config.navigation_pattern, config.navigation_limit)
                .map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            navigation: Box::new(navigation),
            labels: Box::new(PrecedingLabel),
            preview_length: config.preview_length,
        })
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            navigation: Box::new(ClassPatternNavigation::default()),
            labels: Box::new(PrecedingLabel),
            preview_length: 100,
        }
    }
}

impl std::fmt::Debug for Heuristics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heuristics")
            .field("preview_length", &self.preview_length)
            .finish_non_exhaustive()
    }
}
