use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Request failed with status code: {status_code}, message: {message}")]
    RequestFailedWithMessage {
        status_code: reqwest::StatusCode,
        message: String,
    },

    #[error("Rate limit reached")]
    RateLimited,

    #[error("Gave up after {attempts} rate limited attempts")]
    RetriesExhausted { attempts: u32 },

    #[error("Request gate closed")]
    GateClosed,

    #[error("Failed to decode JSON response: {0}")]
    JsonDecodeError(String),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Request body can not be cloned for a retry")]
    UncloneableRequest,

    #[error("Invalid response format")]
    InvalidResponse,

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
