//! Resource-level error types.
//!
//! Resource clients do only the validation needed to build a well-formed
//! request: non-empty ids and a consistent JSON:API envelope. Anything else
//! is left to the remote API, whose failures arrive as [`ResourceError::Http`].

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource client operations.
///
/// # Example
///
/// ```rust
/// use pulse_api::rest::ResourceError;
///
/// let error = ResourceError::TypeMismatch {
///     expected: "iam/people",
///     found: "iam/accounts".to_string(),
/// };
/// assert!(error.to_string().contains("iam/people"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The identifier is empty or blank.
    #[error("{resource} id must not be empty")]
    InvalidId {
        /// The resource name (e.g., "Person").
        resource: &'static str,
    },

    /// The envelope `type` does not match the resource being addressed.
    #[error("Envelope type '{found}' does not match resource type '{expected}'")]
    TypeMismatch {
        /// The type string the resource declares.
        expected: &'static str,
        /// The type string found in the envelope.
        found: String,
    },

    /// A create envelope carries an id.
    #[error("Create payload for {resource} must not carry an id (found '{id}')")]
    UnexpectedId {
        /// The resource name.
        resource: &'static str,
        /// The id found in the envelope.
        id: String,
    },

    /// An update envelope carries an id different from the one in the path.
    #[error("Envelope id '{body_id}' does not match path id '{path_id}'")]
    IdMismatch {
        /// The id used in the request path.
        path_id: String,
        /// The id found in the envelope.
        body_id: String,
    },

    /// Attributes could not be serialized to JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code if the API produced a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
