use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ImpactError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A JSON body could not be parsed into the expected shape.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The completion API returned an error envelope.
    #[error("Completion API error: {0}")]
    Api(String),

    /// The completion API returned no usable text (no candidates, or an empty list).
    #[error("Completion API returned an empty response")]
    EmptyResponse,

    /// The API credential was not supplied. This is fatal at startup.
    #[error("API_KEY environment variable not set")]
    MissingApiKey,
}
