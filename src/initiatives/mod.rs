mod api;
mod model;
mod samples;

pub use model::{Initiative, Intensity};

use crate::core::{Content, GenerationService, RetryConfig};

/// A builder for fetching this quarter's suggested initiatives.
pub struct InitiativesBuilder<'a> {
    generator: &'a dyn GenerationService,
    retry_override: Option<RetryConfig>,
}

impl<'a> InitiativesBuilder<'a> {
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

    /// Fetches the initiatives, falling back to the built-in samples.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(self) -> Content<Vec<Initiative>> {
        api::fetch_initiatives(self.generator, self.retry_override).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_badge_and_wire_name() {
        assert_eq!(Intensity::High.badge(), "High Intensity");
        let i: Initiative = serde_json::from_str(
            r#"{"title":"t","description":"d","difficulty":"Medium"}"#,
        )
        .unwrap();
        assert_eq!(i.difficulty, Intensity::Medium);
    }

    #[test]
    fn samples_rise_in_intensity() {
        let levels: Vec<_> = samples::sample_initiatives()
            .iter()
            .map(|i| i.difficulty)
            .collect();
        assert_eq!(levels, [Intensity::Low, Intensity::Medium, Intensity::High]);
    }

    #[test]
    fn unknown_intensity_is_rejected() {
        let r: Result<Initiative, _> =
            serde_json::from_str(r#"{"title":"t","description":"d","difficulty":"Extreme"}"#);
        assert!(r.is_err());
    }
}
