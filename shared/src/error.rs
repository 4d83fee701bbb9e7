use thiserror::Error;

/// Failures that abort a webhook invocation.
///
/// A downstream non-2xx answer is not one of them: it is relayed to the caller.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid webhook payload: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error("webhook record id {0:?} is not a usable path segment")]
    InvalidUserId(String),

    #[error("invalid auth base url: {0}")]
    InvalidBaseUrl(String),

    #[error("admin api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("admin api answered {status} with a non-JSON body: {source}")]
    InvalidResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
