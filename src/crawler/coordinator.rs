//! Harvest coordinator - page orchestration logic
//!
//! This module drives one harvest run:
//! - Creating the output layout
//! - Handing out pages from the frontier
//! - Fetching, parsing and running every facet extractor
//! - Downloading assets and persisting per-page artifacts
//! - Folding page results into the aggregate
//! - Writing the final summary
//!
//! Every network operation is awaited one at a time, so extraction order
//! equals document order and download order equals enumeration order.

use crate::assets::AssetDownloader;
use crate::config::{validate, validate_page_url, Config};
use crate::crawler::frontier::Frontier;
use crate::crawler::{build_http_client, fetch_page, parse_page};
use crate::facets::Heuristics;
use crate::output::{OutputLayout, Summary};
use crate::state::{Aggregate, PageExtraction};
use crate::url::{page_key, PageNames};
use crate::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use url::Url;

/// What happened when a page was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was already attempted in this run; nothing was done
    AlreadyVisited,
    /// The page was extracted; `links` are its followable same-site links
    Extracted { links: Vec<Url> },
    /// The page was attempted but produced no content
    Failed,
}

impl PageOutcome {
    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }
}

/// Main harvest coordinator structure
///
/// Owns the aggregate of one run exclusively; nothing is shared between runs.
pub struct Harvester {
    config: Config,
    client: Client,
    heuristics: Heuristics,
    layout: OutputLayout,
    downloader: AssetDownloader,
    aggregate: Aggregate,
    page_names: PageNames,
    started_at: DateTime<Utc>,
}

impl Harvester {
    /// Creates a new harvester and its output directories
    ///
    /// # Arguments
    ///
    /// * `config` - The harvest configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to extract pages
    /// * `Err(HarvestError)` - Invalid configuration, client setup or directory creation failed
    pub fn new(config: Config) -> Result<Self> {
        validate(&config)?;

        let heuristics = Heuristics::from_config(&config.heuristics)?;
        let client = build_http_client(&config.fetch)?;

        let layout = OutputLayout::new(&config.output.root);
        layout.create_directories()?;

        let downloader = AssetDownloader::new(client.clone(), config.assets.naming, layout.root());

        Ok(Self {
            config,
            client,
            heuristics,
            layout,
            downloader,
            aggregate: Aggregate::default(),
            page_names: PageNames::default(),
            started_at: Utc::now(),
        })
    }

    /// Replaces the heuristic strategies used by the facet extractors
    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Runs a complete harvest starting at `start_url`
    ///
    /// Pages are taken from the frontier until it is empty or the page
    /// budget is spent. Page failures, an unusable start URL included, are
    /// logged and never abort the run. The summary is written and returned
    /// at the end.
    pub async fn run(&mut self, start_url: &str) -> Result<Summary> {
        self.started_at = Utc::now();

        let start = match validate_page_url(start_url) {
            Ok(start) => start,
            Err(e) => {
                // Counts as an attempted page that produced no content
                self.aggregate.mark_visited(start_url);
                tracing::error!("Error extracting {}: {}", start_url, e);
                return self.write_summary(start_url);
            }
        };

        let extra: Vec<Url> = self
            .config
            .crawl
            .urls
            .iter()
            .filter_map(|entry| match Url::parse(entry) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!("Ignoring page URL {}: {}", entry, e);
                    None
                }
            })
            .collect();

        tracing::info!(
            "Starting harvest of {} (mode: {:?}, max pages: {})",
            start,
            self.config.crawl.mode,
            self.config.crawl.max_pages
        );

        let mut frontier = Frontier::new(start, &self.config.crawl, &extra);
        let mut attempted = 0;

        while let Some(url) = frontier.next_unvisited(&self.aggregate) {
            if let PageOutcome::Extracted { links } = self.extract_url(&url).await {
                let queued = frontier.discover(links, &self.aggregate);
                if queued > 0 {
                    tracing::debug!("Queued {} new pages from {}", queued, url);
                }
            }
            attempted += 1;
        }

        tracing::info!(
            "Harvest finished: {} pages attempted, {} left in frontier",
            attempted,
            frontier.len()
        );

        self.write_summary(start_url)
    }

    /// Extracts a single page
    ///
    /// Requesting a URL that was already attempted in this run is a no-op.
    /// A page failure is logged, leaves no content or structure entry for
    /// the page, and does not affect any other page.
    pub async fn extract_page(&mut self, url: &str) -> PageOutcome {
        match Url::parse(url) {
            Ok(parsed) => self.extract_url(&parsed).await,
            Err(e) => {
                if !self.aggregate.mark_visited(url) {
                    return PageOutcome::AlreadyVisited;
                }
                tracing::error!("Error extracting {}: {}", url, e);
                PageOutcome::Failed
            }
        }
    }

    async fn extract_url(&mut self, url: &Url) -> PageOutcome {
        let key = page_key(url);
        if !self.aggregate.mark_visited(&key) {
            tracing::debug!("Skipping already visited page {}", key);
            return PageOutcome::AlreadyVisited;
        }

        tracing::info!("Extracting: {}", key);

        match self.process_page(url, key).await {
            Ok((extraction, links)) => {
                self.aggregate.merge(extraction);
                PageOutcome::Extracted { links }
            }
            Err(e) => {
                tracing::error!("Error extracting {}: {}", url, e);
                PageOutcome::Failed
            }
        }
    }

    /// Fetches, parses, downloads and persists one page
    ///
    /// Nothing is merged into the aggregate here; the caller folds the
    /// returned extraction in only on success.
    async fn process_page(&mut self, url: &Url, key: String) -> Result<(PageExtraction, Vec<Url>)> {
        let fetched = fetch_page(&self.client, url).await?;
        tracing::debug!(
            "Fetched {} (status {}, {} bytes)",
            fetched.final_url,
            fetched.status_code,
            fetched.body.len()
        );

        let mut facets = parse_page(&fetched.body, &fetched.final_url, &self.heuristics);
        // References resolve against the final URL; records carry the requested one
        facets.relabel(&key);
        let name = self.page_names.claim(url);

        let mut images = Vec::with_capacity(facets.images.len());
        for image in &facets.images {
            if let Some(asset) = self.downloader.download_image(image).await {
                images.push(asset);
            }
        }

        let mut css = Vec::with_capacity(facets.stylesheets.linked.len());
        for stylesheet in &facets.stylesheets.linked {
            if let Some(asset) = self.downloader.download_stylesheet(stylesheet).await {
                css.push(asset);
            }
        }

        self.layout
            .write_inline_styles(&name, &facets.stylesheets.inline)?;
        self.layout.write_snapshot(&name, &fetched.body)?;
        self.layout.write_content(&name, &facets.content)?;
        self.layout.write_structure(&name, &facets.structure)?;

        tracing::info!(
            "Extracted {}: {}/{} images, {}/{} stylesheets, {} inline styles",
            key,
            images.len(),
            facets.images.len(),
            css.len(),
            facets.stylesheets.linked.len(),
            facets.stylesheets.inline.len()
        );

        let links = facets.content.same_site_links(&fetched.final_url);

        Ok((
            PageExtraction {
                key,
                content: facets.content,
                structure: facets.structure,
                images,
                css,
                colors: facets.styles.colors,
                fonts: facets.styles.fonts,
            },
            links,
        ))
    }

    /// Builds the run summary and writes it to the output root
    pub fn write_summary(&self, base_url: &str) -> Result<Summary> {
        let summary = Summary::build(&self.aggregate, base_url, self.started_at, Utc::now());
        let path = self.layout.write_summary(&summary)?;
        tracing::info!("Summary saved to {}", path.display());
        Ok(summary)
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }
}
