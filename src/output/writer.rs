//! Persistence of per-page artifacts and the run summary
//!
//! Layout below the output root:
//!
//! ```text
//! html/<page>.html                  raw markup snapshot
//! content/<page>_content.json       text/DOM facet
//! content/<page>_structure.json     structure facet
//! css/<page>_inline_<i>.css         inline <style> blocks
//! images/, css/                     downloaded assets
//! js/, fonts/, screenshots/         placeholders
//! extraction_summary.json           run summary
//! ```

use crate::facets::{PageContent, PageStructure};
use crate::output::Summary;
use crate::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Category directories created below the output root
pub const CATEGORY_DIRS: [&str; 7] = [
    "html",
    "images",
    "css",
    "js",
    "fonts",
    "content",
    "screenshots",
];

/// File name of the run summary
pub const SUMMARY_FILE: &str = "extraction_summary.json";

/// Writes harvest artifacts below one output root
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a category directory
    pub fn dir(&self, category: &str) -> PathBuf {
        self.root.join(category)
    }

    /// Creates the output root and every category directory
    pub fn create_directories(&self) -> Result<()> {
        for category in CATEGORY_DIRS {
            fs::create_dir_all(self.dir(category))?;
        }
        Ok(())
    }

    /// Writes the raw markup of a page
    pub fn write_snapshot(&self, page: &str, markup: &str) -> Result<PathBuf> {
        let path = self.dir("html").join(format!("{}.html", page));
        fs::write(&path, markup)?;
        Ok(path)
    }

    /// Writes each inline style block to `css/<page>_inline_<i>.css`, numbered from 0
    pub fn write_inline_styles(&self, page: &str, blocks: &[String]) -> Result<Vec<PathBuf>> {
        blocks
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let path = self.dir("css").join(format!("{}_inline_{}.css", page, index));
                fs::write(&path, block)?;
                Ok(path)
            })
            .collect()
    }

    pub fn write_content(&self, page: &str, content: &PageContent) -> Result<PathBuf> {
        let path = self.dir("content").join(format!("{}_content.json", page));
        write_json(&path, content)?;
        Ok(path)
    }

    pub fn write_structure(&self, page: &str, structure: &PageStructure) -> Result<PathBuf> {
        let path = self.dir("content").join(format!("{}_structure.json", page));
        write_json(&path, structure)?;
        Ok(path)
    }

    pub fn write_summary(&self, summary: &Summary) -> Result<PathBuf> {
        let path = self.root.join(SUMMARY_FILE);
        write_json(&path, summary)?;
        Ok(path)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
