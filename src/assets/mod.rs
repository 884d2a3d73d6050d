//! Asset downloading
//!
//! Images and linked stylesheets found by the facet extractors are fetched
//! here and written under their category directory. A failed download
//! produces no record.

mod downloader;

pub use downloader::{local_file_name, AssetDownloader};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Category of a downloadable asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Stylesheet,
}

impl AssetKind {
    /// Output directory for this category, relative to the output root
    pub fn directory(&self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Stylesheet => "css",
        }
    }

    /// File name used when the URL has no final path segment
    pub fn fallback_name(&self) -> &'static str {
        match self {
            Self::Image => "image.jpg",
            Self::Stylesheet => "style.css",
        }
    }
}

/// A downloaded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Absolute URL the image was fetched from
    pub remote_url: String,
    pub alt_text: String,
    pub local_path: PathBuf,
    /// `src` attribute as authored
    pub original_src: String,
}

/// A downloaded stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssAsset {
    pub remote_url: String,
    pub local_path: PathBuf,
}
