use serde::Deserialize;

/// Main configuration structure for Site-Harvest
///
/// Every section is optional in the TOML file; missing keys fall back to
/// the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
    pub crawl: CrawlConfig,
    pub assets: AssetConfig,
    pub heuristics: HeuristicConfig,
}

/// HTTP fetch behavior, shared by page fetches and asset downloads
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total time allowed for one request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Time allowed to establish the connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            connect_timeout_secs: 5,
            user_agent: format!("site-harvest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for every harvested artifact
    pub root: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: "old-website-content".to_string(),
        }
    }
}

/// How pages beyond the start URL are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrawlMode {
    /// Only the start URL is harvested; the page limit is ignored
    #[default]
    Single,
    /// Follow same-site anchors in discovery order
    BreadthFirst,
    /// Start URL followed by an explicit list of URLs
    List,
}

/// Multi-page traversal configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    pub mode: CrawlMode,

    /// Maximum number of pages attempted in one run
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Extra URLs harvested in `list` mode
    pub urls: Vec<String>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            mode: CrawlMode::Single,
            max_pages: 1,
            urls: Vec::new(),
        }
    }
}

/// Strategy for naming downloaded assets on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetNaming {
    /// Final URL path segment only; same basenames overwrite each other
    Basename,
    /// Content digest prefix plus basename
    #[default]
    ContentHash,
    /// Run-scoped counter prefix plus basename
    Counter,
}

/// Asset download configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub naming: AssetNaming,
}

/// Tuning for the best-effort DOM heuristics
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Case-insensitive pattern matched against container class attributes
    #[serde(rename = "navigation-pattern")]
    pub navigation_pattern: String,

    /// Maximum number of navigation containers inspected
    #[serde(rename = "navigation-limit")]
    pub navigation_limit: usize,

    /// Number of characters kept in section text previews
    #[serde(rename = "preview-length")]
    pub preview_length: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            navigation_pattern: "nav|menu".to_string(),
            navigation_limit: 3,
            preview_length: 100,
        }
    }
}
