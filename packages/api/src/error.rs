use thiserror::Error;

/// Failures surfaced by [`crate::ApiClient`].
///
/// No variant is retried automatically; callers decide whether to re-prompt
/// the user (mutations) or fall back to an empty collection (list reads).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection refused, body read, or a
    /// response that was not valid JSON at all.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("server returned {status} for {path}")]
    Status { status: u16, path: String },

    /// The payload was JSON but a record did not match its model.
    #[error("malformed record in response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A list endpoint returned none of the three tolerated shapes
    /// (bare array, `{"data": [...]}`, `{"<key>": [...]}`).
    #[error("unexpected payload shape for `{key}` listing")]
    UnexpectedShape { key: &'static str },
}
