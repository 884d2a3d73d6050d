//! Structure facet
//!
//! Class-carrying sections and containers, plus every form with its fields.

use crate::facets::heuristics::LabelHeuristic;
use crate::facets::{flatten_text, select_all};
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use url::Url;

/// A `<section>` or `<div>` carrying a class attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub tag: String,
    pub classes: Vec<String>,
    pub id: String,
    pub text_preview: String,
}

/// One `<input>`, `<textarea>` or `<select>` inside a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// `type` attribute, or the tag name when absent
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub placeholder: String,
    /// Best-effort label text; see [`LabelHeuristic`]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    pub action: String,
    pub method: String,
    pub fields: Vec<FieldInfo>,
}

/// Layout information of one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStructure {
    pub url: String,
    pub sections: Vec<SectionInfo>,
    pub forms: Vec<FormInfo>,
}

/// Extracts the structure facet of a parsed document
pub fn extract_structure(
    document: &Html,
    page_url: &Url,
    labels: &dyn LabelHeuristic,
    preview_length: usize,
) -> PageStructure {
    let root = document.root_element();

    let sections = select_all(root, "section[class], div[class]")
        .into_iter()
        .map(|element| section_info(element, preview_length))
        .collect();

    let forms = select_all(root, "form")
        .into_iter()
        .map(|form| FormInfo {
            action: attr(form, "action"),
            method: attr(form, "method"),
            fields: select_all(form, "input, textarea, select")
                .into_iter()
                .map(|field| field_info(document, field, labels))
                .collect(),
        })
        .collect();

    PageStructure {
        url: page_url.to_string(),
        sections,
        forms,
    }
}

fn section_info(element: ElementRef<'_>, preview_length: usize) -> SectionInfo {
    SectionInfo {
        tag: element.value().name().to_string(),
        classes: element.value().classes().map(str::to_string).collect(),
        id: attr(element, "id"),
        text_preview: flatten_text(element).chars().take(preview_length).collect(),
    }
}

fn field_info(document: &Html, field: ElementRef<'_>, labels: &dyn LabelHeuristic) -> FieldInfo {
    FieldInfo {
        field_type: field
            .value()
            .attr("type")
            .unwrap_or_else(|| field.value().name())
            .to_string(),
        name: attr(field, "name"),
        placeholder: attr(field, "placeholder"),
        label: labels.label_for(document, field),
    }
}

fn attr(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}
