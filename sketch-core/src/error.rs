//! Error types for the collaborator boundary.
//!
//! The drawing reducer itself never fails. These errors describe input that
//! was rejected before it could become an [`Action`](crate::Action).

use thiserror::Error;

/// Result type for sketch operations.
pub type SketchResult<T> = Result<T, SketchError>;

/// Errors that can occur at the edges of the drawing core.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A pointer sample carried a non-finite coordinate.
    #[error("Invalid point: ({x}, {y})")]
    InvalidPoint {
        /// Rejected X coordinate.
        x: f32,
        /// Rejected Y coordinate.
        y: f32,
    },

    /// Configuration parsed but cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A saved drawing breaks the state invariants.
    #[error("Invalid drawing state: {0}")]
    InvalidState(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
