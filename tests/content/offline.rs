use httpmock::MockServer;
use impactsphere::{
    ContentSource,
    initiatives::{InitiativesBuilder, Intensity},
    insight::{InsightBuilder, InsightKind},
    playbook::{EsgPlaybookCategory, PlaybookBuilder},
    trends::TrendsBuilder,
};

use crate::common::{client_for, fixture, mock_generate};

#[tokio::test]
async fn offline_trends_parse_recorded_completion() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "global sustainability and economic trends",
        200,
        fixture("generate_trends"),
    );
    let client = client_for(&server);

    let trends = TrendsBuilder::new(&client).fetch().await;

    mock.assert();
    assert_eq!(trends.source, ContentSource::Live);
    assert!(trends.banner().is_none());
    assert_eq!(trends.data.len(), 6);
    assert_eq!(trends.data[0].name, "Global Renewable Energy Investment");
    assert_eq!(trends.data[0].change_label(), "▲ 14%");
    assert_eq!(trends.data[5].change_label(), "▼ 1.5%");
}

#[tokio::test]
async fn offline_initiatives_accept_fenced_json() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "quarterly ESG",
        200,
        fixture("generate_initiatives_fenced"),
    );
    let client = client_for(&server);

    let initiatives = InitiativesBuilder::new(&client).fetch().await;

    mock.assert();
    assert!(!initiatives.is_sample());
    let levels: Vec<Intensity> = initiatives.data.iter().map(|i| i.difficulty).collect();
    assert_eq!(levels, vec![Intensity::High, Intensity::Low, Intensity::Medium]);
    assert_eq!(initiatives.data[2].difficulty.badge(), "Medium Intensity");
}

#[tokio::test]
async fn offline_playbook_category_is_live() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "key strategic business values",
        200,
        fixture("generate_playbook_value_drivers"),
    );
    let client = client_for(&server);

    let articles = PlaybookBuilder::new(&client, EsgPlaybookCategory::ValueDrivers)
        .fetch()
        .await;

    mock.assert();
    assert!(!articles.is_sample());
    assert_eq!(articles.data.len(), 2);
    assert_eq!(articles.data[1].title, "ESG Data as a Competitive Edge");
}

#[tokio::test]
async fn offline_insight_is_trimmed() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        "thought-provoking strategic insight",
        200,
        fixture("generate_insight"),
    );
    let client = client_for(&server);

    let insight = InsightBuilder::new(&client, InsightKind::Strategic).fetch().await;

    mock.assert();
    assert_eq!(insight.source, ContentSource::Live);
    assert_eq!(
        insight.data,
        "Companies that price carbon internally make faster, cheaper transition decisions."
    );
}
