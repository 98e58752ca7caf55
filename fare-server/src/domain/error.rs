//! Domain error types.
//!
//! These errors mean an upstream collaborator handed us an edge sequence
//! that does not describe a route. They are distinct from lookup errors.

use super::StationId;

/// Errors raised when building a [`Path`](super::Path) from edges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Path has no edges
    #[error("path must have at least one edge")]
    Empty,

    /// Consecutive edges don't share a station
    #[error(
        "edge {index} arrives at {arrived} but edge {next} departs from {departed}",
        next = .index + 1
    )]
    NotContiguous {
        index: usize,
        arrived: StationId,
        departed: StationId,
    },
}
