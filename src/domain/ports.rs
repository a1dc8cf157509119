use crate::domain::model::QueryAnalysis;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn search_api_url(&self) -> &str;
    fn detail_api_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn page_size(&self) -> usize;
    fn max_items(&self) -> usize;
    fn max_retries(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn concurrency_limit(&self) -> usize;
    fn page_delay(&self) -> Duration;
    fn search_timeout(&self) -> Duration;
    fn detail_timeout(&self) -> Duration;
}

/// Turns free natural-language text into a structured job query.
#[async_trait]
pub trait QueryAnalyzer: Send + Sync {
    async fn analyze(&self, query: &str) -> Result<QueryAnalysis>;
}
