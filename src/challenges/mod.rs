mod api;
mod model;
mod samples;

pub use model::{Challenge, Difficulty};

use crate::core::{Content, GenerationService, RetryConfig};

/// A builder for fetching this week's challenges.
pub struct ChallengesBuilder<'a> {
    generator: &'a dyn GenerationService,
    retry_override: Option<RetryConfig>,
}

impl<'a> ChallengesBuilder<'a> {
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

    /// Fetches the challenges, falling back to the built-in samples.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(self) -> Content<Vec<Challenge>> {
        api::fetch_challenges(self.generator, self.retry_override).await
    }
}
