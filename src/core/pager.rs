use crate::domain::model::{Filter, RawItem, SearchCriteria};
use crate::utils::error::{AggregatorError, Result};
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct PagerOptions {
    pub api_key: Option<String>,
    /// Fixed pause between consecutive page requests.
    pub page_delay: Duration,
    pub timeout: Duration,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            page_delay: Duration::from_millis(100),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchPayload<'a> {
    filters: &'a [Filter],
    from_date: Option<&'a str>,
    order: &'static str,
    max_records: usize,
    start_index: usize,
    to_date: &'a str,
    source: &'static str,
}

/// One page window of the search endpoint.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow<'a> {
    pub start_index: usize,
    pub max_records: usize,
    pub to_date: &'a str,
}

/// Sequential walker over the paginated search endpoint.
#[derive(Debug, Clone)]
pub struct SearchPager {
    client: Client,
    options: PagerOptions,
}

pub fn search_endpoint(api_url: &str) -> String {
    if api_url.ends_with('/') {
        format!("{}search", api_url)
    } else {
        format!("{}/search", api_url)
    }
}

/// RFC 3339 upper bound of the search date window.
pub fn search_window_end() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl SearchPager {
    pub fn new(client: Client, options: PagerOptions) -> Self {
        Self { client, options }
    }

    /// Walks every page for `criteria` and returns the deduplicated items in
    /// page arrival order.
    ///
    /// Any failed page fails the whole call; nothing accumulated so far is
    /// returned. Pagination ends on an empty page, a page with no unseen ids,
    /// a short page, or once `max_items` (when non-zero) is reached.
    pub async fn fetch_all(
        &self,
        cancel: &CancellationToken,
        api_url: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<RawItem>> {
        let filters = criteria.filters();
        let to_date = search_window_end();
        let page_size = criteria.page_size.max(1);
        let max_items = criteria.max_items;

        let mut seen: HashSet<String> = HashSet::new();
        let mut items: Vec<RawItem> = Vec::new();
        let mut start_index = 0;
        let mut page_number = 0;

        loop {
            if cancel.is_cancelled() {
                tracing::info!("Search cancelled after {} items", items.len());
                return Err(AggregatorError::Cancelled);
            }

            let requested = if max_items > 0 {
                let remaining = max_items.saturating_sub(items.len());
                if remaining == 0 {
                    break;
                }
                page_size.min(remaining)
            } else {
                page_size
            };

            page_number += 1;
            let window = PageWindow {
                start_index,
                max_records: requested,
                to_date: &to_date,
            };
            let page = self
                .fetch_page(cancel, api_url, &filters, window)
                .await?
                .unwrap_or_default();
            let returned = page.len();

            if returned == 0 {
                tracing::debug!("Page {} is empty, stopping", page_number);
                break;
            }

            let mut new_items = 0;
            let mut without_id = 0;
            for value in page {
                let Some(item) = RawItem::from_value(value) else {
                    without_id += 1;
                    continue;
                };
                if seen.insert(item.id.clone()) {
                    items.push(item);
                    new_items += 1;
                }
            }

            tracing::debug!(
                "Page {} (start {}): {} returned, {} new, {} without id",
                page_number,
                start_index,
                returned,
                new_items,
                without_id
            );

            if new_items == 0 {
                tracing::debug!("Page {} held nothing new, stopping", page_number);
                break;
            }

            start_index += returned;

            if max_items > 0 && items.len() >= max_items {
                items.truncate(max_items);
                break;
            }

            if returned < requested {
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => return Err(AggregatorError::Cancelled),
                _ = tokio::time::sleep(self.options.page_delay) => {}
            }
        }

        tracing::info!(
            "Search '{}' collected {} unique items over {} pages",
            criteria.term,
            items.len(),
            page_number
        );
        Ok(items)
    }

    /// Issues one search request and returns the raw `ads` array.
    ///
    /// `None` when the payload decodes but carries no `ads` array.
    pub async fn fetch_page(
        &self,
        cancel: &CancellationToken,
        api_url: &str,
        filters: &[Filter],
        window: PageWindow<'_>,
    ) -> Result<Option<Vec<Value>>> {
        let payload = SearchPayload {
            filters,
            from_date: None,
            order: "relevance",
            max_records: window.max_records,
            start_index: window.start_index,
            to_date: window.to_date,
            source: "pb",
        };
        let endpoint = search_endpoint(api_url);
        tracing::debug!(
            "POST {} startIndex={} maxRecords={}",
            endpoint,
            window.start_index,
            window.max_records
        );

        let mut request = self
            .client
            .post(&endpoint)
            .header("Accept", "application/json")
            .timeout(self.options.timeout)
            .json(&payload);
        if let Some(key) = &self.options.api_key {
            request = request.header("api-key", key);
        }

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(AggregatorError::Cancelled),
            response = request.send() => response?,
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Search API returned status {}: {}", status, body);
            return Err(AggregatorError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        match body {
            Value::Object(mut map) => match map.remove("ads") {
                Some(Value::Array(ads)) => Ok(Some(ads)),
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    }
}
