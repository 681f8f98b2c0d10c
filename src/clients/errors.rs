//! HTTP-specific error types for the Pulse API SDK.
//!
//! - [`AuthenticationError`]: No credential was supplied, or the API rejected it
//! - [`RequestError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use pulse_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Request(e)) => println!("API error {}: {}", e.status, e.body),
//!     Err(HttpError::Authentication(e)) => println!("Auth failed: {e}"),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request cannot be authenticated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// No credential was available to authenticate the request.
    #[error("No credentials provided for Pulse API")]
    MissingCredentials,

    /// The API rejected the credential (HTTP 401).
    #[error("Pulse API rejected the credentials (status {status}): {body}")]
    Rejected {
        /// The HTTP status code of the response.
        status: u16,
        /// The parsed response body.
        body: serde_json::Value,
    },
}

/// Error returned when the API answers with a non-successful status.
///
/// The response body is kept as returned so callers can inspect the API's
/// own error documents.
///
/// # Example
///
/// ```rust
/// use pulse_api::clients::RequestError;
/// use serde_json::json;
///
/// let error = RequestError {
///     status: 404,
///     body: json!({"errors": [{"title": "Not found"}]}),
///     request_id: None,
/// };
///
/// assert!(error.to_string().contains("404"));
/// assert!(error.to_string().contains("Not found"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Request failed with status code {status}: {body}")]
pub struct RequestError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from `X-Request-Id` header).
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent over the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty or not rooted at `/`.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Authentication failed or no credential was available.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// A non-2xx HTTP response.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the API produced a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => Some(e.status),
            Self::Authentication(AuthenticationError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
