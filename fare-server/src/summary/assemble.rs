//! The traveler-facing summary.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{Path, StationDisplay, StationId};

use super::SummaryError;

/// Ordered stations, totals, and fare for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSummary {
    /// Stations in visiting order, origin first
    pub stations: Vec<StationDisplay>,
    /// Total duration in time units
    pub duration: u64,
    /// Total distance in distance units
    pub distance: u64,
    /// Fare owed
    pub fare: u64,
}

/// Build the summary for `path`.
///
/// Every station on the path must have a record in `stations`; if any is
/// missing nothing is returned but the error.
pub fn assemble(
    path: &Path,
    stations: &HashMap<StationId, StationDisplay>,
    fare: u64,
) -> Result<PathSummary, SummaryError> {
    let stations = path
        .ordered_station_ids()
        .into_iter()
        .map(|id| {
            stations
                .get(&id)
                .cloned()
                .ok_or(SummaryError::MissingStation(id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PathSummary {
        stations,
        duration: path.total_duration(),
        distance: path.total_distance(),
        fare,
    })
}
