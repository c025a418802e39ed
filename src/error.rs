//! Operation-boundary error type for the items client.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode surfaces here as one variant so the binary can render a
//! single human-readable message per invocation. Nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error surfaced at the operation boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure, or a success body that failed to decode.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx status from the backend, with the best available message.
    #[error("HTTP {status} - {message}")]
    Backend { status: u16, message: String },
    /// The trimmed item name was empty; no request was sent.
    #[error("item name must not be empty")]
    EmptyName,
    /// Local JSON serialization failed while printing output.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
