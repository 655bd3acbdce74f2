//! Centralized constants for default endpoints, model and UA.

/// Identifies this library to the completion API.
pub(crate) const USER_AGENT: &str = concat!("impactsphere/", env!("CARGO_PKG_VERSION"));

/// Generative Language API models base (`{model}:generateContent` is appended).
pub(crate) const DEFAULT_BASE_GENERATE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/";

/// Model used for every prompt unless overridden.
pub(crate) const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API credential.
pub(crate) const API_KEY_ENV: &str = "API_KEY";

/// Optional environment variable overriding the model.
pub(crate) const MODEL_ENV: &str = "IMPACT_MODEL";

/// Header carrying the API credential.
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";
