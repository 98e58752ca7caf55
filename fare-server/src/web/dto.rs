//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{StationDisplay, StationId};
use crate::fare::RiderCategory;
use crate::summary::{PathQuery, PathSummary, PathType};

/// Query for `GET /paths`.
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    /// Origin station id
    pub source: u64,

    /// Destination station id
    pub target: u64,

    /// What to optimise the route for
    #[serde(rename = "type")]
    pub path_type: PathType,

    /// Rider category for discounts (defaults to none)
    #[serde(default)]
    pub rider: RiderCategory,
}

impl PathRequest {
    /// Convert to the core query type.
    pub fn to_query(&self) -> PathQuery {
        PathQuery {
            source: StationId::new(self.source),
            target: StationId::new(self.target),
            path_type: self.path_type,
            rider: self.rider,
        }
    }
}

/// A station in a path response.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

impl StationResponse {
    fn from_display(station: &StationDisplay) -> Self {
        Self {
            id: station.id.get(),
            name: station.name.clone(),
        }
    }
}

/// Response for `GET /paths`.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Stations in visiting order
    pub stations: Vec<StationResponse>,

    /// Total duration
    pub duration: u64,

    /// Total distance
    pub distance: u64,

    /// Fare owed
    pub fare: u64,
}

impl PathResponse {
    /// Convert a domain summary to the response shape.
    pub fn from_summary(summary: &PathSummary) -> Self {
        Self {
            stations: summary
                .stations
                .iter()
                .map(StationResponse::from_display)
                .collect(),
            duration: summary.duration,
            distance: summary.distance,
            fare: summary.fare,
        }
    }
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
