//! Public client surface + builder.
//! Internals are split into `constants` (endpoints, model, UA) and `retry` (backoff policy).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::ImpactError;
use constants::{
    API_KEY_ENV, API_KEY_HEADER, DEFAULT_BASE_GENERATE, DEFAULT_MODEL, MODEL_ENV, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Client for the generative completion API that backs every AI-curated view.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct ImpactClient {
    http: Client,
    base_generate: Url,
    model: String,
    api_key: String,
    retry: RetryConfig,
}

impl std::fmt::Debug for ImpactClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImpactClient")
            .field("base_generate", &self.base_generate.as_str())
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl ImpactClient {
    /// Create a new builder.
    pub fn builder() -> ImpactClientBuilder {
        ImpactClientBuilder::default()
    }

    /// Build a client from the process environment.
    ///
    /// `API_KEY` is required; `IMPACT_MODEL` optionally overrides the model.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::MissingApiKey`] when `API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self, ImpactError> {
        let key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let mut b = Self::builder().api_key(key);
        if let Ok(model) = std::env::var(MODEL_ENV)
            && !model.trim().is_empty()
        {
            b = b.model(model);
        }
        b.build()
    }

    /// The model every prompt is sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The client-wide retry policy.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn generate_url(&self) -> Result<Url, ImpactError> {
        Ok(self
            .base_generate
            .join(&format!("./{}:generateContent", self.model))?)
    }

    pub(crate) fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(API_KEY_HEADER, &self.api_key)
    }

    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, ImpactError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt = 0u32;
        loop {
            // streaming bodies cannot be replayed; send them once
            let Some(this) = req.try_clone() else {
                return Ok(req.send().await?);
            };
            match this.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.retry_on_status.contains(&code) {
                        tracing::debug!(status = code, attempt, "retrying completion request");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    let retryable = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if attempt < cfg.max_retries && retryable {
                        tracing::debug!(error = %e, attempt, "retrying completion request");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ImpactClientBuilder {
    api_key: Option<String>,
    model: Option<String>,
    base_generate: Option<Url>,
    user_agent: Option<String>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ImpactClientBuilder {
    /// Set the API credential. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the model (default `gemini-2.5-flash`).
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the models base (e.g., `https://generativelanguage.googleapis.com/v1beta/models/`).
    #[must_use]
    pub fn base_generate(mut self, url: Url) -> Self {
        self.base_generate = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the client-wide retry policy. Default: disabled.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::MissingApiKey`] if no non-blank key was given, or an
    /// HTTP/URL error if the underlying client cannot be constructed.
    pub fn build(self) -> Result<ImpactClient, ImpactError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ImpactError::MissingApiKey)?;

        let base_generate = match self.base_generate {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_GENERATE)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ImpactClient {
            http,
            base_generate,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
