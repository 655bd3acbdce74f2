use serde::{Serialize, de::DeserializeOwned};

use crate::core::{GenerationService, generate::parse_list, services::Prompt};

/// Where a piece of content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentSource {
    /// Generated by the completion API for this request.
    Live,
    /// The static sample set, substituted after a failed or empty fetch.
    Sample,
}

/// The non-blocking notice shown while sample content is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallbackBanner {
    pub title: &'static str,
    pub message: &'static str,
}

impl FallbackBanner {
    pub const UNAVAILABLE: FallbackBanner = FallbackBanner {
        title: "Live Data Temporarily Unavailable",
        message: "Displaying sample data due to a connection issue. Live content will return shortly.",
    };
}

/// Fetched data tagged with its [`ContentSource`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content<T> {
    pub data: T,
    pub source: ContentSource,
}

impl<T> Content<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: ContentSource::Live,
        }
    }

    pub fn sample(data: T) -> Self {
        Self {
            data,
            source: ContentSource::Sample,
        }
    }

    pub fn is_sample(&self) -> bool {
        self.source == ContentSource::Sample
    }

    /// The banner to display, if any.
    pub fn banner(&self) -> Option<FallbackBanner> {
        self.is_sample().then_some(FallbackBanner::UNAVAILABLE)
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Runs a JSON list prompt, substituting `sample` on any failure or an empty list.
pub(crate) async fn list_or_sample<T, F>(
    generator: &dyn GenerationService,
    prompt: &Prompt,
    what: &str,
    sample: F,
) -> Content<Vec<T>>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let parsed = match generator.generate(prompt).await {
        Ok(raw) => parse_list::<T>(&raw),
        Err(e) => Err(e),
    };
    match parsed {
        Ok(items) => Content::live(items),
        Err(e) => {
            tracing::warn!(what, error = %e, "falling back to sample content");
            Content::sample(sample())
        }
    }
}

/// Runs a free-text prompt, substituting `fallback` on failure. The answer is trimmed.
pub(crate) async fn text_or_fallback(
    generator: &dyn GenerationService,
    prompt: &Prompt,
    what: &str,
    fallback: &str,
) -> Content<String> {
    match generator.generate(prompt).await {
        Ok(text) if !text.trim().is_empty() => Content::live(text.trim().to_string()),
        Ok(_) => {
            tracing::warn!(what, "empty completion; using fallback text");
            Content::sample(fallback.to_string())
        }
        Err(e) => {
            tracing::warn!(what, error = %e, "falling back to fixed text");
            Content::sample(fallback.to_string())
        }
    }
}
