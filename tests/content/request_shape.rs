use httpmock::{Method::POST, MockServer};
use impactsphere::{
    ImpactClient,
    challenges::ChallengesBuilder,
    insight::{InsightBuilder, InsightKind},
};
use url::Url;

use crate::common::{client_for, envelope, generate_path, mock_generate};

const CHALLENGES: &str = r#"[{"title":"Meatless Week","description":"Skip meat for seven days.","difficulty":"Medium"}]"#;

#[tokio::test]
async fn list_prompts_declare_json_schema() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(generate_path())
            .header("x-goog-api-key", "test-key")
            .body_includes(r#""responseMimeType":"application/json""#)
            .body_includes(r#""type":"ARRAY""#)
            .body_includes(r#""enum":["Easy","Medium","Hard"]"#)
            .body_includes(r#""contents":[{"parts":[{"text":"Generate 3 engaging weekly"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(envelope(CHALLENGES));
    });
    let client = client_for(&server);

    let challenges = ChallengesBuilder::new(&client).fetch().await;

    mock.assert();
    assert!(!challenges.is_sample());
    assert_eq!(challenges.data[0].title, "Meatless Week");
}

#[tokio::test]
async fn text_prompts_send_no_generation_config() {
    let server = MockServer::start();
    let json_mode = mock_generate(
        &server,
        "generationConfig",
        200,
        envelope("should not be used"),
    );
    let client = client_for(&server);

    let insight = InsightBuilder::new(&client, InsightKind::Strategic).fetch().await;

    assert_eq!(json_mode.hits(), 0);
    assert!(insight.is_sample());
}

#[tokio::test]
async fn key_travels_in_header() {
    let server = MockServer::start();
    let mock = mock_generate(&server, "weekly", 200, envelope(CHALLENGES));
    let client = ImpactClient::builder()
        .api_key("some-other-key")
        .base_generate(Url::parse(&format!("{}/v1beta/models/", server.base_url())).unwrap())
        .build()
        .unwrap();

    let challenges = ChallengesBuilder::new(&client).fetch().await;

    assert_eq!(mock.hits(), 0);
    assert!(challenges.is_sample());
}
