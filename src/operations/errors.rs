use thiserror::Error;

use crate::rest::ResourceError;

/// Error returned by operation handlers.
///
/// Handler failures carry one line of context naming the failing operation,
/// followed by the underlying error.
///
/// # Example
///
/// ```rust
/// use pulse_api::operations::OperationError;
/// use pulse_api::rest::ResourceError;
///
/// let error = OperationError::failed(
///     "Error assigning member to activity",
///     ResourceError::InvalidId { resource: "Activity" },
/// );
/// assert_eq!(
///     error.to_string(),
///     "Error assigning member to activity: Activity id must not be empty"
/// );
/// ```
#[derive(Debug, Error)]
pub enum OperationError {
    /// The client call failed.
    #[error("{context}: {source}")]
    Failed {
        /// What the handler was doing.
        context: String,
        /// The underlying resource error.
        #[source]
        source: ResourceError,
    },

    /// No handler exists for the resource/operation combination.
    #[error("The operation \"{operation}\" is not supported for {resource}")]
    Unsupported {
        /// The resource or client the operation was sent to.
        resource: String,
        /// The requested operation.
        operation: &'static str,
    },
}

impl OperationError {
    /// Wraps `source` with a context message.
    #[must_use]
    pub fn failed(context: impl Into<String>, source: impl Into<ResourceError>) -> Self {
        Self::Failed {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Returns the HTTP status code if the API produced a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Failed { source, .. } => source.status(),
            Self::Unsupported { .. } => None,
        }
    }
}
