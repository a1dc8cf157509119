use crate::domain::model::Filter;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "job-aggregator")]
#[command(about = "Search Platsbanken job ads and enrich them with full details")]
pub struct CliConfig {
    /// Free-text search term
    pub search_term: Option<String>,

    /// Municipality or county, e.g. "Göteborg" or "Skåne län"
    #[arg(long)]
    pub location: Option<String>,

    /// Extra search filter, repeatable
    #[arg(long = "filter", value_name = "TYPE=VALUE")]
    pub filters: Vec<Filter>,

    /// Cap on returned jobs for this run (0 = unlimited)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Fetch the unfiltered recommended feed instead of searching
    #[arg(long)]
    pub recommended: bool,

    /// Load settings from a TOML file instead of flags and environment
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "PLATSBANKEN_API_URL",
        default_value = "https://platsbanken-api.arbetsformedlingen.se/jobs/v1/"
    )]
    pub search_api_url: String,

    #[arg(
        long,
        env = "PLATSBANKEN_JOB_DETAIL_URL",
        default_value = "https://platsbanken-api.arbetsformedlingen.se/jobs/v1/job/"
    )]
    pub detail_api_url: String,

    #[arg(long, env = "PLATSBANKEN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "PLATSBANKEN_MAX_RECORDS", default_value = "100")]
    pub page_size: usize,

    #[arg(long, env = "PLATSBANKEN_DEFAULT_MAX_JOBS", default_value = "500")]
    pub default_max_items: usize,

    #[arg(long, env = "PLATSBANKEN_MAX_RETRIES", default_value = "3")]
    pub max_retries: u32,

    #[arg(long, env = "PLATSBANKEN_RETRY_DELAY_MS", default_value = "1000")]
    pub retry_delay_ms: u64,

    #[arg(long, env = "PLATSBANKEN_CONCURRENCY", default_value = "10")]
    pub concurrency: usize,

    #[arg(long, default_value = "100")]
    pub page_delay_ms: u64,

    #[arg(long, default_value = "30")]
    pub search_timeout_secs: u64,

    #[arg(long, default_value = "10")]
    pub detail_timeout_secs: u64,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn search_api_url(&self) -> &str {
        &self.search_api_url
    }

    fn detail_api_url(&self) -> &str {
        &self.detail_api_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn max_items(&self) -> usize {
        self.default_max_items
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    fn concurrency_limit(&self) -> usize {
        self.concurrency
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.config.is_none() {
            validate_url("search_api_url", &self.search_api_url)?;
            validate_url("detail_api_url", &self.detail_api_url)?;
            validate_positive_number("page_size", self.page_size, 1)?;
            validate_positive_number("max_retries", self.max_retries as usize, 1)?;
            validate_range("concurrency", self.concurrency, 1, 200)?;
        }

        let has_term = self
            .search_term
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if !self.recommended && !has_term {
            return Err(AggregatorError::validation(
                "a search term is required unless --recommended is given",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_arguments() {
        let config = CliConfig::try_parse_from([
            "job-aggregator",
            "sjuksköterska",
            "--location",
            "Göteborg",
            "--filter",
            "remote=true",
            "--filter",
            "workExtent=FULL_TIME",
            "--max-items",
            "5",
        ])
        .unwrap();

        assert_eq!(config.search_term.as_deref(), Some("sjuksköterska"));
        assert_eq!(config.location.as_deref(), Some("Göteborg"));
        assert_eq!(
            config.filters,
            vec![
                Filter::new("remote", "true"),
                Filter::new("workExtent", "FULL_TIME")
            ]
        );
        assert_eq!(config.max_items, Some(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_term_is_rejected_unless_recommended() {
        let config = CliConfig::try_parse_from(["job-aggregator"]).unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::try_parse_from(["job-aggregator", "--recommended"]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let config = CliConfig::try_parse_from([
            "job-aggregator",
            "kock",
            "--concurrency",
            "0",
            "--search-api-url",
            "https://example.com/",
        ])
        .unwrap();
        assert!(config.validate().is_err());

        let config =
            CliConfig::try_parse_from(["job-aggregator", "kock", "--detail-api-url", "not a url"])
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_filter_syntax_fails_to_parse() {
        let parsed = CliConfig::try_parse_from(["job-aggregator", "kock", "--filter", "remote"]);
        assert!(parsed.is_err());
    }
}
