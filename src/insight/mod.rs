//! Single-sentence prompts: the strategic insight card and the daily green tip.

use crate::core::{Content, GenerationService, Prompt, RetryConfig, content::text_or_fallback};

/// Which one-liner to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    /// A thought-provoking statement for business leaders.
    Strategic,
    /// A daily recommendation for a more sustainable lifestyle.
    DailyTip,
}

impl InsightKind {
    const fn prompt(self) -> &'static str {
        match self {
            Self::Strategic => {
                "Generate a single, thought-provoking strategic insight related to corporate ESG, sustainability, or the green economy. The insight should be concise and suitable for a business leader. Frame it as a single sentence."
            }
            Self::DailyTip => {
                "Generate a concise, actionable, and inspiring daily recommendation for living a more sustainable lifestyle. It should be a single sentence."
            }
        }
    }

    /// The sentence shown when generation fails.
    pub const fn fallback(self) -> &'static str {
        match self {
            Self::Strategic => {
                "Integrating ESG metrics into executive compensation is a key driver for accountability."
            }
            Self::DailyTip => "Check your local community board for recycling events this week!",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Strategic => "strategic insight",
            Self::DailyTip => "daily recommendation",
        }
    }
}

/// A builder for fetching one single-sentence insight.
pub struct InsightBuilder<'a> {
    generator: &'a dyn GenerationService,
    kind: InsightKind,
    retry_override: Option<RetryConfig>,
}

impl<'a> InsightBuilder<'a> {
    pub fn new(generator: &'a dyn GenerationService, kind: InsightKind) -> Self {
        Self {
            generator,
            kind,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the sentence, trimmed; the fixed fallback on failure.
    #[tracing::instrument(skip(self), fields(kind = ?self.kind))]
    pub async fn fetch(self) -> Content<String> {
        let prompt = Prompt::text(self.kind.prompt()).with_retry(self.retry_override);
        text_or_fallback(
            self.generator,
            &prompt,
            self.kind.label(),
            self.kind.fallback(),
        )
        .await
    }
}
