//! Interfaces to the collaborators around the fare core.
//!
//! The core never stores or searches the network itself. It receives an
//! edge sequence from a [`PathFinder`], resolves stations through a
//! [`StationLookup`], and prices lines through a [`LineSurchargeLookup`].
//! All three are plain synchronous calls so they can be mocked in tests.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Edge, LineId, StationDisplay, StationId};

/// What the path-finder optimises for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PathType {
    Distance,
    Duration,
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathType::Distance => f.write_str("DISTANCE"),
            PathType::Duration => f.write_str("DURATION"),
        }
    }
}

/// The path-finder could not connect the requested stations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no {path_type} path from station {from} to station {to}")]
pub struct NoPathFound {
    pub from: StationId,
    pub to: StationId,
    pub path_type: PathType,
}

/// Trait for computing routes through the network.
pub trait PathFinder: Send + Sync {
    /// Find an ordered edge sequence from `source` to `target`.
    fn find_path(
        &self,
        source: StationId,
        target: StationId,
        path_type: PathType,
    ) -> Result<Vec<Edge>, NoPathFound>;
}

/// Trait for resolving station ids to display records.
pub trait StationLookup: Send + Sync {
    /// Look up the given stations. Unknown ids are omitted from the result.
    fn find_stations(&self, ids: &[StationId]) -> HashMap<StationId, StationDisplay>;
}

/// Trait for reading configured per-line surcharges.
pub trait LineSurchargeLookup: Send + Sync {
    /// Surcharge for `line`; 0 when none is configured.
    fn surcharge(&self, line: LineId) -> u32;
}

impl StationLookup for HashMap<StationId, StationDisplay> {
    fn find_stations(&self, ids: &[StationId]) -> HashMap<StationId, StationDisplay> {
        ids.iter()
            .filter_map(|id| self.get(id).map(|s| (*id, s.clone())))
            .collect()
    }
}

impl LineSurchargeLookup for HashMap<LineId, u32> {
    fn surcharge(&self, line: LineId) -> u32 {
        self.get(&line).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_type_json() {
        let parsed: PathType = serde_json::from_str(r#""DURATION""#).unwrap();
        assert_eq!(parsed, PathType::Duration);
        assert_eq!(PathType::Distance.to_string(), "DISTANCE");
    }

    #[test]
    fn map_lookup_omits_unknown() {
        let mut stations = HashMap::new();
        stations.insert(StationId::new(1), StationDisplay::new(StationId::new(1), "교대역"));

        let found = stations.find_stations(&[StationId::new(1), StationId::new(2)]);
        assert_eq!(found.len(), 1);
        assert!(found.contains_key(&StationId::new(1)));
    }

    #[test]
    fn unconfigured_line_has_no_surcharge() {
        let mut lines = HashMap::new();
        lines.insert(LineId::new(2), 500);
        assert_eq!(lines.surcharge(LineId::new(2)), 500);
        assert_eq!(lines.surcharge(LineId::new(7)), 0);
    }
}
