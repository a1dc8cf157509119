use crate::core::detail::DetailFetcher;
use crate::domain::model::EnrichedItem;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct EnrichmentSettings {
    pub concurrency_limit: usize,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

/// Fans detail lookups out over a fixed pool of workers.
///
/// `concurrency_limit` workers pull ids from a shared queue until it runs
/// dry and push finished records onto a results channel. A worker is the
/// slot, so a failed or cancelled lookup frees its slot simply by moving on.
#[derive(Debug, Clone)]
pub struct EnrichmentCoordinator {
    fetcher: DetailFetcher,
}

impl EnrichmentCoordinator {
    pub fn new(fetcher: DetailFetcher) -> Self {
        Self { fetcher }
    }

    /// Enriches every id it can; failed ids are logged and left out.
    ///
    /// Returns records in completion order once every worker has finished.
    /// After cancellation no further lookups are started, though lookups
    /// already in flight run to completion.
    pub async fn enrich_all(
        &self,
        cancel: &CancellationToken,
        detail_url: &str,
        ids: Vec<String>,
        settings: &EnrichmentSettings,
    ) -> Vec<EnrichedItem> {
        if ids.is_empty() {
            return Vec::new();
        }

        let total = ids.len();
        let workers = settings.concurrency_limit.clamp(1, total);

        let (work_tx, work_rx) = mpsc::channel::<String>(total);
        for id in ids {
            // Capacity equals the item count, so this never fails.
            let _ = work_tx.try_send(id);
        }
        drop(work_tx);
        let queue = Arc::new(Mutex::new(work_rx));

        let (result_tx, mut result_rx) = mpsc::channel::<EnrichedItem>(total);
        let detail_url: Arc<str> = Arc::from(detail_url);
        let mut pool = JoinSet::new();

        for worker in 0..workers {
            let queue = Arc::clone(&queue);
            let results = result_tx.clone();
            let fetcher = self.fetcher.clone();
            let cancel = cancel.clone();
            let detail_url = Arc::clone(&detail_url);
            let max_retries = settings.max_retries;
            let retry_delay = settings.retry_delay;

            pool.spawn(async move {
                let mut failures = 0usize;
                loop {
                    if cancel.is_cancelled() {
                        tracing::debug!("Worker {} stopping on cancellation", worker);
                        break;
                    }
                    let next = queue.lock().await.recv().await;
                    let Some(id) = next else {
                        break;
                    };

                    match fetcher
                        .fetch_one(&cancel, &detail_url, &id, max_retries, retry_delay)
                        .await
                    {
                        Ok(detail) => {
                            if results.send(EnrichedItem { id, detail }).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            failures += 1;
                            tracing::warn!("Dropping job {}: {}", id, e);
                        }
                    }
                }
                failures
            });
        }
        drop(result_tx);

        let mut enriched = Vec::with_capacity(total);
        while let Some(item) = result_rx.recv().await {
            enriched.push(item);
        }

        let mut failures = 0;
        while let Some(joined) = pool.join_next().await {
            match joined {
                Ok(count) => failures += count,
                Err(e) => tracing::error!("Enrichment worker aborted: {}", e),
            }
        }

        tracing::info!(
            "Enriched {}/{} jobs with {} workers ({} failed)",
            enriched.len(),
            total,
            workers,
            failures
        );
        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detail::DetailOptions;
    use httpmock::prelude::*;
    use reqwest::Client;
    use serde_json::json;
    use std::collections::HashSet;
    use std::time::Instant;

    fn coordinator() -> EnrichmentCoordinator {
        EnrichmentCoordinator::new(DetailFetcher::new(Client::new(), DetailOptions::default()))
    }

    fn settings(concurrency_limit: usize) -> EnrichmentSettings {
        EnrichmentSettings {
            concurrency_limit,
            max_retries: 2,
            retry_delay: Duration::from_millis(1),
        }
    }

    fn mock_slow_details<'a>(
        server: &'a MockServer,
        ids: &[&str],
        delay: Duration,
    ) -> Vec<httpmock::Mock<'a>> {
        ids.iter()
            .map(|id| {
                server.mock(|when, then| {
                    when.method(GET).path(format!("/job/{id}"));
                    then.status(200).delay(delay).json_body(json!({"id": id}));
                })
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_ids_launch_nothing() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"id": "x"}));
        });

        let items = coordinator()
            .enrich_all(&CancellationToken::new(), &server.url("/job/"), vec![], &settings(4))
            .await;

        assert!(items.is_empty());
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn test_failing_item_is_dropped_not_fatal() {
        let server = MockServer::start();
        for id in ["1", "2", "3", "4"] {
            server.mock(|when, then| {
                when.method(GET).path(format!("/job/{id}"));
                then.status(200).json_body(json!({"id": id, "headline": "Kock"}));
            });
        }
        let broken = server.mock(|when, then| {
            when.method(GET).path("/job/5");
            then.status(500);
        });

        let ids: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
        let items = coordinator()
            .enrich_all(&CancellationToken::new(), &server.url("/job/"), ids, &settings(2))
            .await;

        assert_eq!(broken.hits(), 2);
        assert_eq!(items.len(), 4);
        let got: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(got, HashSet::from(["1", "2", "3", "4"]));
    }

    #[tokio::test]
    async fn test_more_workers_than_items() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/job/only");
            then.status(200).json_body(json!({"id": "only"}));
        });

        let items = coordinator()
            .enrich_all(
                &CancellationToken::new(),
                &server.url("/job/"),
                vec!["only".to_string()],
                &settings(200),
            )
            .await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].detail["id"], "only");
    }

    #[tokio::test]
    async fn test_cancelled_token_starts_no_lookups() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"id": "a"}));
        });

        let cancel = CancellationToken::new();
        cancel.cancel();
        let items = coordinator()
            .enrich_all(
                &cancel,
                &server.url("/job/"),
                vec!["a".to_string(), "b".to_string()],
                &settings(2),
            )
            .await;

        assert!(items.is_empty());
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn test_in_flight_lookups_never_exceed_limit() {
        let server = MockServer::start();
        let ids = ["1", "2", "3", "4", "5", "6"];
        let mocks = mock_slow_details(&server, &ids, Duration::from_millis(300));

        // Two slots over six 300ms lookups needs three rounds.
        let started = Instant::now();
        let items = coordinator()
            .enrich_all(
                &CancellationToken::new(),
                &server.url("/job/"),
                ids.iter().map(|id| id.to_string()).collect(),
                &settings(2),
            )
            .await;
        let elapsed = started.elapsed();

        assert_eq!(items.len(), 6);
        assert!(
            elapsed >= Duration::from_millis(850),
            "finished in {elapsed:?}, more than two lookups ran at once"
        );
        for mock in &mocks {
            mock.assert_hits(1);
        }
    }

    #[tokio::test]
    async fn test_cancel_mid_enrichment_lets_in_flight_finish() {
        let server = MockServer::start();
        let ids = ["a", "b", "c", "d"];
        let mocks = mock_slow_details(&server, &ids, Duration::from_millis(300));

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let items = coordinator()
            .enrich_all(
                &cancel,
                &server.url("/job/"),
                ids.iter().map(|id| id.to_string()).collect(),
                &settings(2),
            )
            .await;

        let got: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(got, HashSet::from(["a", "b"]));
        mocks[0].assert_hits(1);
        mocks[1].assert_hits(1);
        assert_eq!(mocks[2].hits(), 0);
        assert_eq!(mocks[3].hits(), 0);
    }
}
