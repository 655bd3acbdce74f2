use futures::future::BoxFuture;

use crate::core::{ImpactClient, ImpactError, RetryConfig, Schema};

/// One request to the completion API.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Natural-language instruction sent as the single user turn.
    pub text: String,
    /// When present, the answer is requested as JSON matching this schema.
    pub schema: Option<Schema>,
    /// Per-call override of the client's retry policy.
    pub retry: Option<RetryConfig>,
}

impl Prompt {
    /// A free-text prompt.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            schema: None,
            retry: None,
        }
    }

    /// A prompt whose answer must be JSON shaped like `schema`.
    pub fn json(text: impl Into<String>, schema: Schema) -> Self {
        Self {
            text: text.into(),
            schema: Some(schema),
            retry: None,
        }
    }

    /// Overrides the retry policy for this prompt only.
    #[must_use]
    pub fn with_retry(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry = cfg;
        self
    }
}

/// A trait for services that can answer prompts with generated text.
///
/// This decouples the content views from the HTTP client so that fallbacks and
/// ordering can be exercised with in-process stand-ins. It is implemented by
/// [`ImpactClient`].
pub trait GenerationService: Send + Sync {
    /// Asynchronously generates a completion for `prompt`.
    ///
    /// For JSON prompts the returned string is the raw JSON document; callers parse it.
    fn generate<'a>(&'a self, prompt: &'a Prompt) -> BoxFuture<'a, Result<String, ImpactError>>;
}

impl GenerationService for ImpactClient {
    fn generate<'a>(&'a self, prompt: &'a Prompt) -> BoxFuture<'a, Result<String, ImpactError>> {
        Box::pin(crate::core::generate::generate(self, prompt))
    }
}
