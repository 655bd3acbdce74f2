use crate::core::{
    Content, GenerationService, Prompt, RetryConfig, Schema, content::list_or_sample,
};

use super::{model::SustainabilityTrend, samples::sample_trends};

const TRENDS_PROMPT: &str = "Generate a list of 6 current, impactful global sustainability and economic trends. For each trend, provide its name, its current value with units, its recent percentage change (positive for increase, negative for decrease), and a very brief one-sentence insight. The trends should cover diverse areas like renewable energy investment, carbon pricing, EV market share, corporate ESG reporting rates, circular economy growth, and global plastic waste generation.";

fn trends_schema() -> Schema {
    Schema::array_of(Schema::object([
        (
            "name",
            Schema::string(
                "The name of the global sustainability metric (e.g., 'Global Renewable Energy Investment').",
            ),
        ),
        (
            "value",
            Schema::string(
                "The current value of the metric, including units (e.g., '$1.7T', '421 ppm').",
            ),
        ),
        (
            "change",
            Schema::number(
                "The recent percentage change (positive for increase, negative for decrease). E.g., 15 for +15%, -5 for -5%.",
            ),
        ),
        (
            "insight",
            Schema::string("A very brief, one-sentence insight about this trend."),
        ),
    ]))
}

pub(super) async fn fetch_trends(
    generator: &dyn GenerationService,
    retry_override: Option<RetryConfig>,
) -> Content<Vec<SustainabilityTrend>> {
    let prompt = Prompt::json(TRENDS_PROMPT, trends_schema()).with_retry(retry_override);
    list_or_sample(generator, &prompt, "trends", sample_trends).await
}
