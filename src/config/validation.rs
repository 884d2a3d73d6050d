use crate::config::types::{Config, CrawlConfig, FetchConfig, HeuristicConfig, OutputConfig};
use crate::ConfigError;
use regex::RegexBuilder;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    validate_crawl_config(&config.crawl)?;
    validate_heuristic_config(&config.heuristics)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.root.is_empty() {
        return Err(ConfigError::Validation("root cannot be empty".to_string()));
    }

    Ok(())
}

/// Validates crawl configuration
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    for entry in &config.urls {
        validate_page_url(entry)?;
    }

    Ok(())
}

/// Validates that a page URL is absolute and uses HTTP(S)
pub fn validate_page_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid page URL '{}': {}", value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Page URL '{}' must use HTTP or HTTPS",
            value
        )));
    }

    Ok(url)
}

/// Validates heuristic tuning
fn validate_heuristic_config(config: &HeuristicConfig) -> Result<(), ConfigError> {
    if config.navigation_pattern.is_empty() {
        return Err(ConfigError::InvalidPattern(
            "navigation_pattern cannot be empty".to_string(),
        ));
    }

    RegexBuilder::new(&config.navigation_pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;

    if config.navigation_limit < 1 {
        return Err(ConfigError::Validation(
            "navigation_limit must be >= 1".to_string(),
        ));
    }

    Ok(())
}
