//! The shared error type for every API operation.
//!
//! All failure modes surface as one opaque [`Error`] value: callers treat any
//! error as "operation did not complete". There is no retry classification at
//! this layer — an operation either succeeded or it did not.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by every API operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be completed (connection failure, timeout,
    /// invalid URL, TLS failure).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    ///
    /// `body` carries the raw response body for diagnostics; it is not
    /// interpreted at this layer.
    #[error("API responded with status {status}: {body}")]
    Status {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// The raw response body, lossily decoded as UTF-8.
        body: String,
    },

    /// The response body was not valid JSON or did not match the target shape.
    #[error("could not decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A singular response decoded cleanly but did not contain the expected
    /// root field (e.g. `"extension"`).
    ///
    /// This is a protocol violation by the remote server, distinct from a
    /// decode failure: the body was valid JSON of the wrong shape.
    #[error("JSON response does not have the {field} field")]
    MissingRootField {
        /// Name of the root field the envelope was expected to carry.
        field: &'static str,
    },

    /// The client configuration is invalid or incomplete.
    ///
    /// Produced at construction time; a client is never built from an invalid
    /// configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error is a `404 Not Found` API response.
    ///
    /// Not-found conditions are not a distinct error kind; this helper only
    /// inspects the status code of a [`Error::Status`] value.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
