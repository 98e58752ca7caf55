//! Snapshot loading and lookups.

use std::collections::HashMap;
use std::path::Path as FsPath;

use serde::Deserialize;

use crate::domain::{Edge, LineId, StationDisplay, StationId};
use crate::summary::{LineSurchargeLookup, NoPathFound, PathFinder, PathType, StationLookup};

use super::error::NetworkError;

/// A line and its configured surcharge.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRecord {
    pub id: LineId,
    pub name: String,
    #[serde(default)]
    pub surcharge: u32,
}

/// A precomputed route between two stations.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    pub source: StationId,
    pub target: StationId,
    #[serde(rename = "type")]
    pub path_type: PathType,
    pub edges: Vec<Edge>,
}

/// On-disk layout of a snapshot.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    stations: Vec<StationDisplay>,
    #[serde(default)]
    lines: Vec<LineRecord>,
    #[serde(default)]
    routes: Vec<RouteRecord>,
}

type RouteKey = (StationId, StationId, PathType);

/// Read-only view of the network for one server process.
#[derive(Debug, Clone, Default)]
pub struct NetworkSnapshot {
    stations: HashMap<StationId, StationDisplay>,
    lines: HashMap<LineId, LineRecord>,
    routes: HashMap<RouteKey, Vec<Edge>>,
}

impl NetworkSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SnapshotFile =
            serde_json::from_str(&json).map_err(|source| NetworkError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        Self::build(file.stations, file.lines, file.routes)
    }

    /// Build a snapshot from records, rejecting duplicate ids.
    ///
    /// A later route with the same endpoints and type replaces an earlier one.
    pub fn build(
        stations: Vec<StationDisplay>,
        lines: Vec<LineRecord>,
        routes: Vec<RouteRecord>,
    ) -> Result<Self, NetworkError> {
        let mut station_map = HashMap::with_capacity(stations.len());
        for station in stations {
            let id = station.id;
            if station_map.insert(id, station).is_some() {
                return Err(NetworkError::DuplicateStation(id.get()));
            }
        }

        let mut line_map = HashMap::with_capacity(lines.len());
        for line in lines {
            let id = line.id;
            if line_map.insert(id, line).is_some() {
                return Err(NetworkError::DuplicateLine(id.get()));
            }
        }

        let routes = routes
            .into_iter()
            .map(|r| ((r.source, r.target, r.path_type), r.edges))
            .collect();

        Ok(Self {
            stations: station_map,
            lines: line_map,
            routes,
        })
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of precomputed routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl StationLookup for NetworkSnapshot {
    fn find_stations(&self, ids: &[StationId]) -> HashMap<StationId, StationDisplay> {
        self.stations.find_stations(ids)
    }
}

impl LineSurchargeLookup for NetworkSnapshot {
    fn surcharge(&self, line: LineId) -> u32 {
        self.lines.get(&line).map_or(0, |l| l.surcharge)
    }
}

impl PathFinder for NetworkSnapshot {
    fn find_path(
        &self,
        source: StationId,
        target: StationId,
        path_type: PathType,
    ) -> Result<Vec<Edge>, NoPathFound> {
        self.routes
            .get(&(source, target, path_type))
            .cloned()
            .ok_or(NoPathFound {
                from: source,
                to: target,
                path_type,
            })
    }
}


#[cfg(test)]
mod bundled_data {
    use super::*;
    use crate::fare::RiderCategory;
    use crate::summary::FareService;

    #[test]
    fn bundled_network_prices_routes() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/network.json");
        let network = NetworkSnapshot::load(path).unwrap();
        let service = FareService::default();

        let edges = network
            .find_path(StationId::new(3), StationId::new(2), PathType::Distance)
            .unwrap();
        let summary = service
            .compute_summary(edges, &network, &network, RiderCategory::None)
            .unwrap();
        assert_eq!(summary.fare, 1750);
    }
}
