//! Source error types.

use thiserror::Error;

/// Errors that can occur while materializing a document tree.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input does not describe a well-formed document.
    #[error("Malformed document: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },

    /// The input is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Section markers in a flat layer list do not pair up.
    #[error("Unbalanced section markers: {message}")]
    UnbalancedSection {
        /// Error message.
        message: String,
    },
}

impl SourceError {
    /// Creates a new malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates a new unbalanced section error.
    pub fn unbalanced(message: impl Into<String>) -> Self {
        Self::UnbalancedSection {
            message: message.into(),
        }
    }
}
