//! Core error types for the export pipeline.
//!
//! The error taxonomy is deliberately small: any non-success response from
//! the activity feed, the account directory, or an enrichment lookup becomes
//! a [`FetchError`] and aborts the whole in-flight export. Unrecognized
//! transaction kinds are not errors at all; the classifier skips those rows.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the export pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while talking to the remote API.
///
/// There is no retry policy anywhere: a single failed page or lookup
/// discards all partial results for the export invocation.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the response body not read.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The API returned a non-success HTTP status.
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The response decoded but the expected payload was absent.
    #[error("Response missing expected data: {0}")]
    MissingData(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
