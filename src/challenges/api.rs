use crate::core::{
    Content, GenerationService, Prompt, RetryConfig, Schema, content::list_or_sample,
};

use super::{model::Challenge, samples::sample_challenges};

const CHALLENGES_PROMPT: &str = "Generate 3 engaging weekly sustainability challenges for individuals. Each challenge should have a title, a detailed description, and a difficulty level ('Easy', 'Medium', 'Hard').";

fn challenges_schema() -> Schema {
    Schema::array_of(Schema::object([
        (
            "title",
            Schema::string("The name of the weekly sustainability challenge."),
        ),
        (
            "description",
            Schema::string(
                "A detailed explanation of the challenge, what it involves, and why it's impactful.",
            ),
        ),
        (
            "difficulty",
            Schema::enumeration(
                ["Easy", "Medium", "Hard"],
                "The difficulty level of the challenge (Easy, Medium, or Hard).",
            ),
        ),
    ]))
}

pub(super) async fn fetch_challenges(
    generator: &dyn GenerationService,
    retry_override: Option<RetryConfig>,
) -> Content<Vec<Challenge>> {
    let prompt = Prompt::json(CHALLENGES_PROMPT, challenges_schema()).with_retry(retry_override);
    list_or_sample(generator, &prompt, "challenges", sample_challenges).await
}
