//! Error types for store operations.

use crate::backend::BackendError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in document store operations.
///
/// The taxonomy is deliberately small. `InvalidArgument` means the call
/// itself was malformed and must not be retried as-is. `Unavailable` means
/// the backing store could not be reached or timed out; reads are safe to
/// retry, but retrying `create_document` creates a new record each time.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The call was malformed, e.g. an empty collection name.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the problem.
        message: String,
    },

    /// The backing store is unreachable, unconfigured, or timed out.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Description of the failure.
        reason: String,
    },
}

impl StoreError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an unavailability error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if the call was malformed and must not be retried.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StoreError::InvalidArgument { .. })
    }

    /// Returns true if the backing store could not be reached.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable { .. })
    }
}

impl From<BackendError> for StoreError {
    fn from(err: BackendError) -> Self {
        // Every backend fault, including lock timeouts, is unavailability
        // from the caller's point of view.
        StoreError::unavailable(err.to_string())
    }
}
