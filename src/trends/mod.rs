mod api;
mod model;
mod samples;

pub use model::SustainabilityTrend;
pub use samples::sample_trends;

use crate::core::{Content, GenerationService, RetryConfig};

/// A builder for fetching the global sustainability snapshot.
pub struct TrendsBuilder<'a> {
    generator: &'a dyn GenerationService,
    retry_override: Option<RetryConfig>,
}

impl<'a> TrendsBuilder<'a> {
    pub fn new(generator: &'a dyn GenerationService) -> Self {
        Self {
            generator,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(self) -> Content<Vec<SustainabilityTrend>> {
        api::fetch_trends(self.generator, self.retry_override).await
    }
}
