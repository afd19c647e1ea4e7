//! Extraction error types.

use thiserror::Error;

/// Errors surfaced by the guarded extraction entry point.
///
/// A well-formed tree cannot fail extraction; the only failure class is a
/// tree whose shape breaks the limits an [`Extractor`](crate::Extractor) was
/// configured with.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// Layer nesting goes deeper than the configured limit.
    #[error("Layer nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The configured nesting limit.
        limit: usize,
    },
}
