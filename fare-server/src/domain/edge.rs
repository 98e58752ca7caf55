//! Edge type.
//!
//! An `Edge` is one traversed segment of a route: a hop between two
//! adjacent stations on a single line.

use serde::{Deserialize, Serialize};

use super::{LineId, StationId};

/// One traversed segment of a route.
///
/// Distance and duration are unsigned, so the non-negativity invariant
/// holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Station the segment departs from
    pub from: StationId,
    /// Station the segment arrives at
    pub to: StationId,
    /// Line that owns this segment
    pub line: LineId,
    /// Segment length in distance units
    pub distance: u32,
    /// Travel time in time units
    pub duration: u32,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: StationId, to: StationId, line: LineId, distance: u32, duration: u32) -> Self {
        Self {
            from,
            to,
            line,
            distance,
            duration,
        }
    }

    /// Returns true if `next` departs from the station this edge arrives at.
    pub fn chains_to(&self, next: &Edge) -> bool {
        self.to == next.from
    }
}
