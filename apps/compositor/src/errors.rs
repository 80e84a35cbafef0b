use thiserror::Error;

/// Compositor-level error type.
///
/// Pagination itself never surfaces an error to the user (measurement
/// failures degrade to a default block height, stale passes are discarded),
/// so these variants mostly cross the boundary at ingest (malformed
/// credential links) and in external collaborators (share-link resolvers).
#[derive(Debug, Error)]
pub enum CompositorError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Measurement failed for block '{key}': {reason}")]
    Measurement { key: String, reason: String },

    #[error("Share link error: {0}")]
    ShareLink(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
