//! Streaming asset downloader
//!
//! Bodies are streamed into a partial file while being hashed, then the
//! partial file is renamed to its final name. Final names depend on the
//! configured [`AssetNaming`]:
//!
//! | Naming | File name |
//! |--------|-----------|
//! | `Basename` | `a.jpg` (later assets with the same name overwrite) |
//! | `ContentHash` | `3f2a9c0d1e4b5a67_a.jpg` |
//! | `Counter` | `0007_a.jpg` |

use crate::assets::{AssetKind, CssAsset, ImageAsset};
use crate::config::AssetNaming;
use crate::crawler::classify_error;
use crate::facets::ImageRef;
use crate::url::asset_basename;
use crate::{HarvestError, Result};
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Number of hex digits of the content digest used in file names
const DIGEST_PREFIX_LEN: usize = 16;

/// Downloads assets for one harvest run
///
/// The counter used by [`AssetNaming::Counter`] is scoped to this value,
/// so one downloader must be shared by every page of a run.
pub struct AssetDownloader {
    client: Client,
    naming: AssetNaming,
    root: PathBuf,
    /// Assets saved so far
    saved: u32,
    /// Downloads started so far; keys partial file names
    attempts: u64,
}

impl AssetDownloader {
    /// Creates a downloader writing below `root`
    pub fn new(client: Client, naming: AssetNaming, root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            naming,
            root: root.into(),
            saved: 0,
            attempts: 0,
        }
    }

    /// Downloads an image, logging and returning None on failure
    pub async fn download_image(&mut self, image: &ImageRef) -> Option<ImageAsset> {
        match self.download(&image.remote_url, AssetKind::Image).await {
            Ok(local_path) => Some(ImageAsset {
                remote_url: image.remote_url.to_string(),
                alt_text: image.alt_text.clone(),
                local_path,
                original_src: image.original_src.clone(),
            }),
            Err(e) => {
                tracing::warn!("Could not download image {}: {}", image.remote_url, e);
                None
            }
        }
    }

    /// Downloads a stylesheet, logging and returning None on failure
    pub async fn download_stylesheet(&mut self, url: &Url) -> Option<CssAsset> {
        match self.download(url, AssetKind::Stylesheet).await {
            Ok(local_path) => Some(CssAsset {
                remote_url: url.to_string(),
                local_path,
            }),
            Err(e) => {
                tracing::warn!("Could not download stylesheet {}: {}", url, e);
                None
            }
        }
    }

    /// Downloads one asset into its category directory
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written file
    /// * `Err(HarvestError)` - Network failure, non-success status, or I/O error;
    ///   no file is left behind
    pub async fn download(&mut self, url: &Url, kind: AssetKind) -> Result<PathBuf> {
        self.attempts += 1;
        let directory = self.root.join(kind.directory());
        let partial = directory.join(format!(".download-{}.partial", self.attempts));

        let digest = match self.stream_to_file(url, &partial).await {
            Ok(digest) => digest,
            Err(e) => {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e);
            }
        };

        let basename = asset_basename(url, kind.fallback_name());
        let path = directory.join(local_file_name(self.naming, &basename, &digest, self.saved));

        if let Err(e) = tokio::fs::rename(&partial, &path).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(e.into());
        }

        self.saved += 1;
        tracing::debug!("Saved {} to {}", url, path.display());
        Ok(path)
    }

    /// Streams the response body to `path`, returning the hex SHA-256 digest
    async fn stream_to_file(&self, url: &Url, path: &Path) -> Result<String> {
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = File::create(path).await?;
        let mut hasher = Sha256::new();

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| classify_error(url.as_str(), e))?
        {
            hasher.update(&chunk);
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(hex::encode(hasher.finalize()))
    }
}

/// Final file name of a downloaded asset
///
/// # Arguments
///
/// * `naming` - Naming strategy
/// * `basename` - Final path segment of the asset URL
/// * `digest` - Hex SHA-256 digest of the asset body
/// * `sequence` - Number of assets saved earlier in this run
pub fn local_file_name(naming: AssetNaming, basename: &str, digest: &str, sequence: u32) -> String {
    match naming {
        AssetNaming::Basename => basename.to_string(),
        AssetNaming::ContentHash => {
            let prefix = digest.get(..DIGEST_PREFIX_LEN).unwrap_or(digest);
            format!("{}_{}", prefix, basename)
        }
        AssetNaming::Counter => format!("{:04}_{}", sequence, basename),
    }
}
