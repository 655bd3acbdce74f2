use httpmock::MockServer;
use impactsphere::{Backoff, RetryConfig, trends::TrendsBuilder};
use std::time::Duration;

use crate::common::{client_for, client_with_retry, mock_generate};

fn quick_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    }
}

#[tokio::test]
async fn default_client_does_not_retry() {
    let server = MockServer::start();
    let mock = mock_generate(&server, "trends", 503, "{}".to_string());
    let client = client_for(&server);

    let trends = TrendsBuilder::new(&client).fetch().await;

    mock.assert_hits(1);
    assert!(trends.is_sample());
}

#[tokio::test]
async fn client_retry_policy_repeats_retryable_status() {
    let server = MockServer::start();
    let mock = mock_generate(&server, "trends", 503, "{}".to_string());
    let client = client_with_retry(&server, quick_retry(2));

    let trends = TrendsBuilder::new(&client).fetch().await;

    mock.assert_hits(3);
    assert!(trends.is_sample());
}

#[tokio::test]
async fn per_call_policy_overrides_client() {
    let server = MockServer::start();
    let mock = mock_generate(&server, "trends", 429, "{}".to_string());
    let client = client_for(&server);

    let trends = TrendsBuilder::new(&client)
        .retry_policy(Some(quick_retry(1)))
        .fetch()
        .await;

    mock.assert_hits(2);
    assert!(trends.is_sample());
}

#[tokio::test]
async fn non_retryable_status_is_not_repeated() {
    let server = MockServer::start();
    let mock = mock_generate(&server, "trends", 400, "{}".to_string());
    let client = client_with_retry(&server, quick_retry(3));

    let trends = TrendsBuilder::new(&client).fetch().await;

    mock.assert_hits(1);
    assert!(trends.is_sample());
}
