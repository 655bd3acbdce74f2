mod api;
mod model;
mod samples;

pub use model::{LibraryCategory, LibraryItem};

use crate::core::{CategoryView, Content, GenerationService, RetryConfig};

/// Tab state for the library page.
pub type LibraryView = CategoryView<LibraryCategory, LibraryItem>;

/// A builder for fetching the items of one library category.
pub struct LibraryBuilder<'a> {
    generator: &'a dyn GenerationService,
    category: LibraryCategory,
    retry_override: Option<RetryConfig>,
}

impl<'a> LibraryBuilder<'a> {
    pub fn new(generator: &'a dyn GenerationService, category: LibraryCategory) -> Self {
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

    #[tracing::instrument(skip(self), fields(category = %self.category))]
    pub async fn fetch(self) -> Content<Vec<LibraryItem>> {
        api::fetch_library(self.generator, self.category, self.retry_override).await
    }
}
