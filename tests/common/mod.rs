#![allow(dead_code)]

use httpmock::{Method::POST, Mock, MockServer};
use impactsphere::{ImpactClient, RetryConfig};
use std::{fs, path::Path};
use url::Url;

pub const API_KEY: &str = "test-key";
pub const MODEL: &str = "gemini-2.5-flash";

pub fn generate_path() -> String {
    format!("/v1beta/models/{MODEL}:generateContent")
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Wraps `text` in a single-candidate completion envelope.
pub fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP",
            "index": 0
        }],
        "modelVersion": MODEL
    })
    .to_string()
}

pub fn client_for(server: &MockServer) -> ImpactClient {
    ImpactClient::builder()
        .api_key(API_KEY)
        .base_generate(Url::parse(&format!("{}/v1beta/models/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn client_with_retry(server: &MockServer, retry: RetryConfig) -> ImpactClient {
    ImpactClient::builder()
        .api_key(API_KEY)
        .base_generate(Url::parse(&format!("{}/v1beta/models/", server.base_url())).unwrap())
        .retry_config(retry)
        .build()
        .unwrap()
}

/// Answers every completion request whose body contains `needle` with `body`.
pub fn mock_generate<'a>(
    server: &'a MockServer,
    needle: &str,
    status: u16,
    body: String,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(generate_path())
            .header("x-goog-api-key", API_KEY)
            .body_includes(needle);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}
