use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub search_endpoint: String,
    pub detail_endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub detail_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub page_size: Option<usize>,
    pub max_items: Option<usize>,
    pub concurrent_requests: Option<usize>,
    pub page_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryConfig {
    pub attempts: Option<u32>,
    pub delay_ms: Option<u64>,
}

impl TomlConfig {
    /// Loads settings from a TOML file, expanding `${VAR}` references.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AggregatorError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AggregatorError::ConfigValidation {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn search_api_url(&self) -> &str {
        &self.source.search_endpoint
    }

    fn detail_api_url(&self) -> &str {
        &self.source.detail_endpoint
    }

    /// Empty keys and unresolved `${VAR}` placeholders count as absent.
    fn api_key(&self) -> Option<&str> {
        self.source
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty() && !k.starts_with("${"))
    }

    fn page_size(&self) -> usize {
        self.extract.page_size.unwrap_or(100)
    }

    fn max_items(&self) -> usize {
        self.extract.max_items.unwrap_or(500)
    }

    fn max_retries(&self) -> u32 {
        self.retry.attempts.unwrap_or(3)
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry.delay_ms.unwrap_or(1000))
    }

    fn concurrency_limit(&self) -> usize {
        self.extract.concurrent_requests.unwrap_or(10)
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(self.extract.page_delay_ms.unwrap_or(100))
    }

    fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(30))
    }

    fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.source.detail_timeout_seconds.unwrap_or(10))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.search_endpoint", &self.source.search_endpoint)?;
        validate_url("source.detail_endpoint", &self.source.detail_endpoint)?;
        validate_positive_number("extract.page_size", self.page_size(), 1)?;
        validate_range("extract.concurrent_requests", self.concurrency_limit(), 1, 200)?;
        validate_positive_number("retry.attempts", self.max_retries() as usize, 1)?;
        Ok(())
    }
}
