use thiserror::Error;

/// Errors returned by the Places web service client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Transport failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API.
    #[error("Places API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP 200 with a non-OK `status` field in the payload
    /// (e.g. `REQUEST_DENIED`, `INVALID_REQUEST`, `OVER_QUERY_LIMIT`).
    #[error("Places API status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: String,
        message: Option<String>,
    },

    /// Response body was not the expected JSON shape.
    #[error("failed to decode Places response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlacesError>;
