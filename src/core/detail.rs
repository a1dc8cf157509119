use crate::domain::model::Attributes;
use crate::utils::error::DetailError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct DetailOptions {
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Fetches one detail record per id with a fixed-delay retry policy.
///
/// Transport errors and non-success statuses are retried; a success status
/// with an undecodable body, or one whose `id` is missing or differs from the
/// requested id, is permanent and returned at once.
/// The delay between attempts is the same for every attempt.
#[derive(Debug, Clone)]
pub struct DetailFetcher {
    client: Client,
    options: DetailOptions,
}

impl DetailFetcher {
    pub fn new(client: Client, options: DetailOptions) -> Self {
        Self { client, options }
    }

    pub async fn fetch_one(
        &self,
        cancel: &CancellationToken,
        detail_url: &str,
        id: &str,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Result<Attributes, DetailError> {
        let attempts = max_retries.max(1);
        let url = format!("{}{}", detail_url, id);
        let mut last_error = None;

        for attempt in 1..=attempts {
            if cancel.is_cancelled() {
                return Err(DetailError::Cancelled);
            }

            match self.attempt(&url, id).await {
                Ok(record) => return Ok(record),
                Err(e) if e.is_transient() => {
                    tracing::debug!(
                        "Detail {} attempt {}/{} failed: {}",
                        id,
                        attempt,
                        attempts,
                        e
                    );
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }

            if attempt < attempts {
                tokio::select! {
                    _ = cancel.cancelled() => return Err(DetailError::Cancelled),
                    _ = tokio::time::sleep(retry_delay) => {}
                }
            }
        }

        Err(DetailError::Exhausted {
            attempts,
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempt made".to_string()),
        })
    }

    async fn attempt(&self, url: &str, id: &str) -> Result<Attributes, DetailError> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .timeout(self.options.timeout);
        if let Some(key) = &self.options.api_key {
            request = request.header("api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DetailError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let record = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(record)) => record,
            Ok(other) => {
                return Err(DetailError::Malformed(format!(
                    "expected an object, got {}",
                    json_kind(&other)
                )))
            }
            Err(e) => return Err(DetailError::Malformed(e.to_string())),
        };

        check_record_id(&record, id)?;
        Ok(record)
    }
}

fn check_record_id(record: &Attributes, expected: &str) -> Result<(), DetailError> {
    match record.get("id") {
        None | Some(Value::Null) => Err(DetailError::Malformed("record has no id".to_string())),
        Some(Value::String(actual)) if actual != expected => Err(DetailError::IdMismatch {
            expected: expected.to_string(),
            actual: actual.clone(),
        }),
        Some(_) => Ok(()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn fetcher() -> DetailFetcher {
        DetailFetcher::new(Client::new(), DetailOptions::default())
    }

    #[tokio::test]
    async fn test_fetch_one_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/job/abc").header("Accept", "application/json");
            then.status(200)
                .json_body(json!({"id": "abc", "headline": "Undersköterska"}));
        });

        let record = fetcher()
            .fetch_one(
                &CancellationToken::new(),
                &server.url("/job/"),
                "abc",
                3,
                Duration::from_millis(1),
            )
            .await
            .unwrap();

        mock.assert();
        assert_eq!(record["headline"], "Undersköterska");
    }

    #[tokio::test]
    async fn test_status_errors_are_retried_until_exhausted() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/job/abc");
            then.status(502);
        });

        let err = fetcher()
            .fetch_one(
                &CancellationToken::new(),
                &server.url("/job/"),
                "abc",
                3,
                Duration::from_millis(1),
            )
            .await
            .unwrap_err();

        assert_eq!(mock.hits(), 3);
        assert!(matches!(err, DetailError::Exhausted { attempts: 3, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_not_retried() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/job/abc");
            then.status(200).body("{not json");
        });

        let err = fetcher()
            .fetch_one(
                &CancellationToken::new(),
                &server.url("/job/"),
                "abc",
                5,
                Duration::from_millis(1),
            )
            .await
            .unwrap_err();

        assert_eq!(mock.hits(), 1);
        assert!(matches!(err, DetailError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_id_mismatch_is_permanent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/job/abc");
            then.status(200).json_body(json!({"id": "other"}));
        });

        let err = fetcher()
            .fetch_one(
                &CancellationToken::new(),
                &server.url("/job/"),
                "abc",
                3,
                Duration::from_millis(1),
            )
            .await
            .unwrap_err();

        assert_eq!(mock.hits(), 1);
        assert!(matches!(err, DetailError::IdMismatch { .. }));
    }

    #[tokio::test]
    async fn test_zero_retries_still_attempts_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/job/abc");
            then.status(500);
        });

        let result = fetcher()
            .fetch_one(
                &CancellationToken::new(),
                &server.url("/job/"),
                "abc",
                0,
                Duration::from_millis(1),
            )
            .await;

        assert!(result.is_err());
        assert_eq!(mock.hits(), 1);
    }

    #[tokio::test]
    async fn test_cancellation_between_attempts() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/job/abc");
            then.status(503);
        });

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = fetcher()
            .fetch_one(&cancel, &server.url("/job/"), "abc", 10, Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, DetailError::Cancelled));
        assert_eq!(mock.hits(), 1);
    }

    #[test]
    fn test_check_record_id() {
        let ok = json!({"id": "1"}).as_object().cloned().unwrap();
        assert!(check_record_id(&ok, "1").is_ok());

        let null_id = json!({"id": null}).as_object().cloned().unwrap();
        assert!(check_record_id(&null_id, "1").is_err());

        let numeric = json!({"id": 1}).as_object().cloned().unwrap();
        assert!(check_record_id(&numeric, "1").is_ok());
    }
}
