use httpmock::MockServer;
use impactsphere::{
    ContentSource, FallbackBanner,
    challenges::ChallengesBuilder,
    insight::{InsightBuilder, InsightKind},
    library::{LibraryBuilder, LibraryCategory},
    playbook::{EsgPlaybookCategory, PlaybookBuilder},
    trends::{TrendsBuilder, sample_trends},
};

use crate::common::{client_for, envelope, fixture, mock_generate};

#[tokio::test]
async fn server_error_yields_sample_trends_and_banner() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "global sustainability and economic trends",
        500,
        r#"{"error":{"code":500,"message":"internal"}}"#.to_string(),
    );
    let client = client_for(&server);

    let trends = TrendsBuilder::new(&client).fetch().await;

    mock.assert_hits(1);
    assert_eq!(trends.source, ContentSource::Sample);
    assert_eq!(trends.data, sample_trends());
    let banner = trends.banner().expect("banner while sample data is shown");
    assert_eq!(banner, FallbackBanner::UNAVAILABLE);
    assert_eq!(banner.title, "Live Data Temporarily Unavailable");
}

#[tokio::test]
async fn empty_list_counts_as_failure() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "weekly sustainability challenges",
        200,
        fixture("generate_empty_list"),
    );
    let client = client_for(&server);

    let challenges = ChallengesBuilder::new(&client).fetch().await;

    mock.assert();
    assert!(challenges.is_sample());
    assert_eq!(challenges.data.len(), 3);
}

#[tokio::test]
async fn malformed_json_falls_back_per_category() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "household waste",
        200,
        envelope("Here are some tips: reuse, reduce, recycle."),
    );
    let client = client_for(&server);

    let items = LibraryBuilder::new(&client, LibraryCategory::Tips).fetch().await;

    mock.assert();
    assert!(items.is_sample());
    assert_eq!(items.data.len(), 4);
}

#[tokio::test]
async fn blocked_prompt_without_candidates_falls_back() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "advancing ESG data readiness",
        200,
        fixture("generate_no_candidates"),
    );
    let client = client_for(&server);

    let articles = PlaybookBuilder::new(&client, EsgPlaybookCategory::DataReadinessFramework)
        .fetch()
        .await;

    mock.assert();
    assert!(articles.is_sample());
    assert_eq!(articles.data.len(), 4);
}

#[tokio::test]
async fn api_error_envelope_gives_fixed_sentence() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "daily",
        200,
        fixture("generate_error_quota"),
    );
    let client = client_for(&server);

    let tip = InsightBuilder::new(&client, InsightKind::DailyTip).fetch().await;

    mock.assert();
    assert!(tip.is_sample());
    assert_eq!(tip.data, InsightKind::DailyTip.fallback());
}
