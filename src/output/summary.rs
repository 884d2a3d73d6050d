//! Run summary
//!
//! Built once at the end of a run from the aggregate. Colors and fonts are
//! deduplicated here and nowhere else.

use crate::state::Aggregate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only view of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Pages attempted, including those whose fetch failed
    pub pages_extracted: usize,
    /// Pages whose content was extracted
    pub pages_with_content: usize,
    pub failed_pages: Vec<String>,
    pub total_images: usize,
    pub total_css_files: usize,
    pub unique_colors: Vec<String>,
    pub unique_fonts: Vec<String>,
    /// Attempted pages in visit order
    pub pages: Vec<String>,
}

impl Summary {
    /// Computes the summary of a run
    pub fn build(
        aggregate: &Aggregate,
        base_url: &str,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            base_url: base_url.to_string(),
            started_at,
            finished_at,
            pages_extracted: aggregate.visited_urls().len(),
            pages_with_content: aggregate.text_content().len(),
            failed_pages: aggregate.failed_urls(),
            total_images: aggregate.images().len(),
            total_css_files: aggregate.css().len(),
            unique_colors: unique_in_order(aggregate.colors()),
            unique_fonts: unique_in_order(aggregate.fonts()),
            pages: aggregate.visited_urls().to_vec(),
        }
    }

    /// Run duration in whole seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Distinct values, each kept at its first occurrence
pub fn unique_in_order(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect()
}
