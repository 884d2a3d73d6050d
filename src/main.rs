//! Site-Harvest main entry point
//!
//! This is the command-line interface for the Site-Harvest content extractor.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use site_harvest::config::{load_config, validate, AssetNaming, Config, CrawlMode};
use site_harvest::output::print_summary;
use site_harvest::Harvester;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Site-Harvest: content extraction for website rebuilds
///
/// Site-Harvest fetches pages of an existing website and saves their text,
/// images, stylesheets, design tokens and structure for reuse.
#[derive(Parser, Debug)]
#[command(name = "site-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Extract reusable content from an existing website", long_about = None)]
struct Cli {
    /// Page to start harvesting from
    #[arg(value_name = "URL")]
    url: String,

    /// Output root directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Maximum number of pages to attempt
    #[arg(short, long, value_name = "N")]
    pages: Option<u32>,

    /// How pages beyond the start URL are chosen
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Additional page to harvest in list mode (repeatable)
    #[arg(long = "url", value_name = "URL")]
    urls: Vec<String>,

    /// File naming strategy for downloaded assets
    #[arg(long, value_enum)]
    naming: Option<NamingArg>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    BreadthFirst,
    List,
}

impl From<ModeArg> for CrawlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => CrawlMode::Single,
            ModeArg::BreadthFirst => CrawlMode::BreadthFirst,
            ModeArg::List => CrawlMode::List,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NamingArg {
    Basename,
    ContentHash,
    Counter,
}

impl From<NamingArg> for AssetNaming {
    fn from(naming: NamingArg) -> Self {
        match naming {
            NamingArg::Basename => AssetNaming::Basename,
            NamingArg::ContentHash => AssetNaming::ContentHash,
            NamingArg::Counter => AssetNaming::Counter,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    validate(&config).context("invalid configuration")?;

    tracing::info!(
        "Output root: {}, naming: {:?}",
        config.output.root,
        config.assets.naming
    );

    let output_root = PathBuf::from(&config.output.root);
    let mut harvester = Harvester::new(config).context("failed to prepare harvest")?;

    let summary = match harvester.run(&cli.url).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    if !cli.quiet {
        print_summary(&summary, &output_root);
    }

    Ok(())
}

/// Loads the optional configuration file and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.root = output.to_string_lossy().into_owned();
    }
    if let Some(pages) = cli.pages {
        config.crawl.max_pages = pages;
    }
    if !cli.urls.is_empty() {
        config.crawl.urls = cli.urls.clone();
        // An explicit list implies list mode unless a mode was given
        if cli.mode.is_none() {
            config.crawl.mode = CrawlMode::List;
        }
        if cli.pages.is_none() {
            config.crawl.max_pages = config.crawl.max_pages.max(cli.urls.len() as u32 + 1);
        }
    }
    if let Some(mode) = cli.mode {
        config.crawl.mode = mode.into();
    }
    if let Some(naming) = cli.naming {
        config.assets.naming = naming.into();
    }

    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading configuration from: {}", path.display());
    let config = load_config(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully");
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_harvest=info,warn"),
            1 => EnvFilter::new("site_harvest=debug,info"),
            2 => EnvFilter::new("site_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
