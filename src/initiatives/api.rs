use crate::core::{
    Content, GenerationService, Prompt, RetryConfig, Schema, content::list_or_sample,
};

use super::{model::Initiative, samples::sample_initiatives};

const INITIATIVES_PROMPT: &str = "Generate 3 high-impact quarterly ESG (Environmental, Social, Governance) initiatives for a forward-thinking organization, inspired by 'The Leader's Guide to Sustainable Business Transformation'. Each should have a title, a detailed description of its strategic value, and a resource intensity level ('Low', 'Medium', 'High').";

fn initiatives_schema() -> Schema {
    Schema::array_of(Schema::object([
        ("title", Schema::string("The name of the ESG initiative.")),
        (
            "description",
            Schema::string(
                "A detailed explanation of the initiative, its strategic value, and potential implementation steps, inspired by concepts in the ESG guide. Should be at least 2-3 paragraphs long.",
            ),
        ),
        (
            "difficulty",
            Schema::enumeration(
                ["Low", "Medium", "High"],
                "The resource intensity level of the initiative (Low, Medium, or High).",
            ),
        ),
    ]))
}

pub(super) async fn fetch_initiatives(
    generator: &dyn GenerationService,
    retry_override: Option<RetryConfig>,
) -> Content<Vec<Initiative>> {
    let prompt = Prompt::json(INITIATIVES_PROMPT, initiatives_schema()).with_retry(retry_override);
    list_or_sample(generator, &prompt, "initiatives", sample_initiatives).await
}
