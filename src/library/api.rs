use crate::core::{
    Content, GenerationService, Prompt, RetryConfig, Schema, content::list_or_sample,
};

use super::{
    model::{LibraryCategory, LibraryItem},
    samples::sample_items,
};

fn library_schema() -> Schema {
    Schema::array_of(Schema::object([
        (
            "title",
            Schema::string("A catchy and descriptive title for the library item."),
        ),
        (
            "description",
            Schema::string(
                "A detailed description of the tip, recipe, or DIY project. Should be a few paragraphs long.",
            ),
        ),
    ]))
}

pub(super) async fn fetch_library(
    generator: &dyn GenerationService,
    category: LibraryCategory,
    retry_override: Option<RetryConfig>,
) -> Content<Vec<LibraryItem>> {
    let prompt = Prompt::json(category.prompt(), library_schema()).with_retry(retry_override);
    list_or_sample(generator, &prompt, category.as_str(), || {
        sample_items(category)
    })
    .await
}
