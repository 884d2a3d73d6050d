//! URL handling module for Site-Harvest
//!
//! This module resolves authored references against the page they appear
//! on, decides which anchors are followable and same-site, and derives the
//! file names used for persisted pages and assets.

mod domain;
mod naming;
mod resolve;

// Re-export main functions
pub use domain::same_site;
pub use naming::{asset_basename, page_name, PageNames};
pub use resolve::{page_key, resolve_page_link, resolve_reference};
