//! Summary error types.

use crate::domain::{PathError, StationId};
use crate::fare::FareError;

use super::NoPathFound;

/// Everything that can stop a path summary from being produced.
///
/// No partial summary is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    /// The path-finder found no route
    #[error(transparent)]
    NoPath(#[from] NoPathFound),

    /// The edge sequence is not a valid path
    #[error("invalid path: {0}")]
    InvalidPath(#[from] PathError),

    /// The fare could not be computed
    #[error("fare calculation failed: {0}")]
    Fare(#[from] FareError),

    /// A station on the path has no display record
    #[error("no display record for station {0}")]
    MissingStation(StationId),
}
