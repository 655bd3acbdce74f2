mod api;
mod model;
mod samples;

pub use model::{EsgPlaybookCategory, ResourceItem};

use crate::core::{CategoryView, Content, GenerationService, RetryConfig};

/// Tab state for the playbook page.
pub type PlaybookView = CategoryView<EsgPlaybookCategory, ResourceItem>;

/// A builder for fetching the articles of one playbook category.
pub struct PlaybookBuilder<'a> {
    generator: &'a dyn GenerationService,
    category: EsgPlaybookCategory,
    retry_override: Option<RetryConfig>,
}

impl<'a> PlaybookBuilder<'a> {
    /// Creates a new `PlaybookBuilder` for a given category.
    pub fn new(generator: &'a dyn GenerationService, category: EsgPlaybookCategory) -> Self {
        Self {
            generator,
            category,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the articles. Never fails: on any error the category's sample
    /// articles are returned, marked as [`ContentSource::Sample`](crate::core::ContentSource::Sample).
    #[tracing::instrument(skip(self), fields(category = %self.category))]
    pub async fn fetch(self) -> Content<Vec<ResourceItem>> {
        api::fetch_playbook(self.generator, self.category, self.retry_override).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_samples() {
        for c in EsgPlaybookCategory::ALL {
            assert_eq!(samples::sample_resources(c).len(), 4, "{c}");
        }
    }

    #[test]
    fn category_serializes_to_display_name() {
        let v = serde_json::to_value(EsgPlaybookCategory::DataReadinessFramework).unwrap();
        assert_eq!(v, "Data Readiness Framework");
    }
}
