use crate::core::{
    Content, GenerationService, Prompt, RetryConfig, Schema, content::list_or_sample,
};

use super::{
    model::{EsgPlaybookCategory, ResourceItem},
    samples::sample_resources,
};

pub(super) fn resource_schema() -> Schema {
    Schema::array_of(Schema::object([
        (
            "title",
            Schema::string(
                "A professional and descriptive title for the resource, based on the provided ESG guide.",
            ),
        ),
        (
            "description",
            Schema::string(
                "A detailed summary of the resource, outlining its strategic value for an organization. Should be at least 2-3 paragraphs long and reflect concepts from the ESG guide.",
            ),
        ),
    ]))
}

pub(super) async fn fetch_playbook(
    generator: &dyn GenerationService,
    category: EsgPlaybookCategory,
    retry_override: Option<RetryConfig>,
) -> Content<Vec<ResourceItem>> {
    let prompt = Prompt::json(category.prompt(), resource_schema()).with_retry(retry_override);
    list_or_sample(generator, &prompt, category.as_str(), || {
        sample_resources(category)
    })
    .await
}
