//! Error types for tool gestures and geometry construction.

use thiserror::Error;

/// Errors that can occur while driving a construction gesture.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Configuration captured at gesture start is unusable (e.g. a polygon
    /// with fewer than three sides).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A result was queried at the wrong point in the gesture lifecycle,
    /// e.g. `result()` before any successful finalize.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The finalized geometry has no usable area (zero radius, single-node
    /// path). Finalization still succeeds; callers that cannot render the
    /// output may surface this instead.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}
