use impactsphere::{
    ImpactClient,
    challenges::ChallengesBuilder,
    initiatives::InitiativesBuilder,
    insight::{InsightBuilder, InsightKind},
    playbook::{EsgPlaybookCategory, PlaybookBuilder},
    trends::TrendsBuilder,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client from API_KEY (and optionally IMPACT_MODEL) with a 20-second timeout.
    let client = ImpactClient::builder()
        .api_key(std::env::var("API_KEY").unwrap_or_default())
        .timeout(Duration::from_secs(20))
        .build()?;

    // 2. Dashboard snapshot: trends and the strategic insight, fetched concurrently.
    let (trends, insight) = tokio::join!(
        TrendsBuilder::new(&client).fetch(),
        InsightBuilder::new(&client, InsightKind::Strategic).fetch(),
    );
    if let Some(banner) = trends.banner() {
        println!("[{}] {}", banner.title, banner.message);
    }
    println!("--- Global Sustainability Trends ---");
    for t in &trends.data {
        println!("  {:<40} {:>10}  {}", t.name, t.value, t.change_label());
    }
    println!();
    println!("Strategic insight: {}", insight.data);
    println!();

    // 3. One tab of the playbook.
    let articles = PlaybookBuilder::new(&client, EsgPlaybookCategory::IndustryUseCases)
        .fetch()
        .await;
    println!("--- {} ---", EsgPlaybookCategory::IndustryUseCases);
    for a in &articles.data {
        println!("* {}", a.title);
    }
    println!();

    // 4. Quarterly initiatives and weekly challenges.
    let initiatives = InitiativesBuilder::new(&client).fetch().await;
    for i in &initiatives.data {
        println!("[{}] {}", i.difficulty.badge(), i.title);
    }
    let challenges = ChallengesBuilder::new(&client).fetch().await;
    for c in &challenges.data {
        println!("({:?}) {}", c.difficulty, c.title);
    }

    Ok(())
}
