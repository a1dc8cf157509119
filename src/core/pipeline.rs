use crate::core::detail::{DetailFetcher, DetailOptions};
use crate::core::enrichment::{EnrichmentCoordinator, EnrichmentSettings};
use crate::core::location::{LocationResolver, LocationTable};
use crate::core::pager::{search_window_end, PageWindow, PagerOptions, SearchPager};
use crate::domain::model::{AggregationResult, EnrichedItem, Filter, RawItem, SearchCriteria};
use crate::domain::ports::{ConfigProvider, QueryAnalyzer};
use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::validate_non_empty_string;
use reqwest::Client;
use serde::de::Error as _;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const RECOMMENDED_COUNT: usize = 25;

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub search_api_url: String,
    pub detail_api_url: String,
    pub api_key: Option<String>,
    pub page_size: usize,
    /// Default cap when a request names none; 0 means unlimited.
    pub max_items: usize,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub concurrency_limit: usize,
    pub page_delay: Duration,
    pub search_timeout: Duration,
    pub detail_timeout: Duration,
}

impl PipelineSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            search_api_url: config.search_api_url().to_string(),
            detail_api_url: config.detail_api_url().to_string(),
            api_key: config.api_key().map(str::to_string),
            page_size: config.page_size(),
            max_items: config.max_items(),
            max_retries: config.max_retries(),
            retry_delay: config.retry_delay(),
            concurrency_limit: config.concurrency_limit(),
            page_delay: config.page_delay(),
            search_timeout: config.search_timeout(),
            detail_timeout: config.detail_timeout(),
        }
    }

    fn enrichment(&self) -> EnrichmentSettings {
        EnrichmentSettings {
            concurrency_limit: self.concurrency_limit,
            max_retries: self.max_retries,
            retry_delay: self.retry_delay,
        }
    }
}

/// Location lookup, pagination and enrichment wired together.
///
/// Holds no per-request state; one instance serves any number of
/// concurrent `aggregate` calls.
pub struct AggregationPipeline {
    resolver: LocationResolver,
    pager: SearchPager,
    coordinator: EnrichmentCoordinator,
    settings: PipelineSettings,
}

impl AggregationPipeline {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C, table: Arc<LocationTable>) -> Result<Self> {
        Self::with_settings(PipelineSettings::from_config(config), table)
    }

    pub fn with_settings(settings: PipelineSettings, table: Arc<LocationTable>) -> Result<Self> {
        let client = Client::builder().build()?;
        let pager = SearchPager::new(
            client.clone(),
            PagerOptions {
                api_key: settings.api_key.clone(),
                page_delay: settings.page_delay,
                timeout: settings.search_timeout,
            },
        );
        let fetcher = DetailFetcher::new(
            client,
            DetailOptions {
                api_key: settings.api_key.clone(),
                timeout: settings.detail_timeout,
            },
        );

        Ok(Self {
            resolver: LocationResolver::new(table),
            pager,
            coordinator: EnrichmentCoordinator::new(fetcher),
            settings,
        })
    }

    /// Searches, deduplicates and enriches jobs for one request.
    ///
    /// Only an empty search term, a failed search page or cancellation fail
    /// the call. Detail lookups that fail are dropped and counted in
    /// `total_enrichment_failures`.
    pub async fn aggregate(
        &self,
        cancel: &CancellationToken,
        search_term: &str,
        location_name: Option<&str>,
        extra_filters: Vec<Filter>,
        max_items: Option<usize>,
    ) -> Result<AggregationResult> {
        validate_non_empty_string("search_term", search_term)?;

        let location = match location_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => {
                let resolved = self.resolver.resolve(name);
                match &resolved {
                    Some(location) => tracing::info!(
                        "Location '{}' -> {} {} ({})",
                        name,
                        location.kind.as_filter_type(),
                        location.id,
                        location.name
                    ),
                    None => tracing::warn!("No location filter for '{}'", name),
                }
                resolved
            }
            None => None,
        };

        let criteria = SearchCriteria {
            term: search_term.trim().to_string(),
            location,
            extra_filters,
            max_items: max_items.unwrap_or(self.settings.max_items),
            page_size: self.settings.page_size,
        };

        tracing::info!(
            "Searching jobs for '{}' (max {}, page size {})",
            criteria.term,
            criteria.max_items,
            criteria.page_size
        );
        let raw = self
            .pager
            .fetch_all(cancel, &self.settings.search_api_url, &criteria)
            .await?;

        self.enrich(cancel, raw).await
    }

    /// The upstream's default feed: one unfiltered page, enriched.
    ///
    /// A feed response without an `ads` array is a decode failure.
    pub async fn recommended(&self, cancel: &CancellationToken) -> Result<AggregationResult> {
        let to_date = search_window_end();
        let window = PageWindow {
            start_index: 0,
            max_records: RECOMMENDED_COUNT,
            to_date: &to_date,
        };
        let page = self
            .pager
            .fetch_page(cancel, &self.settings.search_api_url, &[], window)
            .await?
            .ok_or_else(|| {
                AggregatorError::Decode(serde_json::Error::custom(
                    "recommended feed response has no ads array",
                ))
            })?;

        let mut seen = HashSet::new();
        let raw: Vec<RawItem> = page
            .into_iter()
            .filter_map(RawItem::from_value)
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        tracing::info!("Recommended feed returned {} jobs", raw.len());

        self.enrich(cancel, raw).await
    }

    /// Runs a natural-language query through `analyzer`, then aggregates.
    ///
    /// When the analysis asks for jobs without an experience requirement,
    /// enriched records flagged `requiresExperience: true` are removed and
    /// counted in `total_filtered_out`.
    pub async fn search_natural(
        &self,
        cancel: &CancellationToken,
        query: &str,
        analyzer: &dyn QueryAnalyzer,
    ) -> Result<AggregationResult> {
        validate_non_empty_string("query", query)?;

        let analysis = analyzer.analyze(query).await?;
        tracing::info!(
            "Analyzed query: job '{}', municipality '{}'",
            analysis.job,
            analysis.municipality
        );

        let location = Some(analysis.municipality.as_str()).filter(|m| !m.trim().is_empty());
        let mut result = self
            .aggregate(cancel, &analysis.job, location, analysis.extra_filters(), None)
            .await?;

        if analysis.requires_experience == Some(false) {
            let before = result.items.len();
            result.items.retain(|item| !requires_experience(item));
            result.total_filtered_out = before - result.items.len();
            tracing::info!(
                "Removed {} jobs requiring experience",
                result.total_filtered_out
            );
        }

        Ok(result)
    }

    async fn enrich(
        &self,
        cancel: &CancellationToken,
        raw: Vec<RawItem>,
    ) -> Result<AggregationResult> {
        let total_raw_found = raw.len();
        let ids: Vec<String> = raw
            .into_iter()
            .map(|item| item.id)
            .filter(|id| !id.is_empty())
            .collect();
        let valid_ids = ids.len();

        let items = self
            .coordinator
            .enrich_all(
                cancel,
                &self.settings.detail_api_url,
                ids,
                &self.settings.enrichment(),
            )
            .await;

        if cancel.is_cancelled() {
            return Err(AggregatorError::Cancelled);
        }

        let total_enriched = items.len();
        let result = AggregationResult {
            items,
            total_raw_found,
            total_enriched,
            total_enrichment_failures: valid_ids.saturating_sub(total_enriched),
            total_filtered_out: 0,
        };
        tracing::info!(
            "Aggregation done: {} found, {} enriched, {} failed",
            result.total_raw_found,
            result.total_enriched,
            result.total_enrichment_failures
        );
        Ok(result)
    }
}

fn requires_experience(item: &EnrichedItem) -> bool {
    matches!(item.detail.get("requiresExperience"), Some(Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requires_experience_flag() {
        let flagged = EnrichedItem {
            id: "1".to_string(),
            detail: json!({"requiresExperience": true}).as_object().cloned().unwrap(),
        };
        let open = EnrichedItem {
            id: "2".to_string(),
            detail: json!({"requiresExperience": false}).as_object().cloned().unwrap(),
        };
        let unknown = EnrichedItem {
            id: "3".to_string(),
            detail: json!({}).as_object().cloned().unwrap(),
        };
        assert!(requires_experience(&flagged));
        assert!(!requires_experience(&open));
        assert!(!requires_experience(&unknown));
    }
}
