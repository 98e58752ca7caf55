//! Path aggregate.
//!
//! A `Path` is the ordered chain of edges from an origin to a destination.
//! Totals and the station sequence are derived on demand; nothing is cached
//! or mutated after construction.

use std::collections::HashSet;

use super::{Edge, LineId, PathError, StationId};

/// A complete origin-to-destination traversal.
///
/// # Invariants
///
/// - At least one edge
/// - Consecutive edges connect (`edges[i].to == edges[i + 1].from`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    edges: Vec<Edge>,
}

impl Path {
    /// Constructs a path, validating that the edges form a chain.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `edges` is empty
    /// - two adjacent edges don't share a station
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_server::domain::{Edge, LineId, Path, StationId};
    ///
    /// let line = LineId::new(3);
    /// let path = Path::new(vec![
    ///     Edge::new(StationId::new(1), StationId::new(4), line, 35, 2),
    ///     Edge::new(StationId::new(4), StationId::new(3), line, 60, 0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(path.total_distance(), 95);
    /// assert_eq!(path.ordered_station_ids().len(), 3);
    /// ```
    pub fn new(edges: Vec<Edge>) -> Result<Self, PathError> {
        if edges.is_empty() {
            return Err(PathError::Empty);
        }

        if let Some((index, pair)) = edges
            .windows(2)
            .enumerate()
            .find(|(_, pair)| !pair[0].chains_to(&pair[1]))
        {
            return Err(PathError::NotContiguous {
                index,
                arrived: pair[0].to,
                departed: pair[1].from,
            });
        }

        Ok(Self { edges })
    }

    /// Returns the edges in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the station the path starts at.
    pub fn origin(&self) -> StationId {
        self.edges[0].from
    }

    /// Returns the station the path ends at.
    pub fn destination(&self) -> StationId {
        self.edges[self.edges.len() - 1].to
    }

    /// Sum of all edge distances.
    pub fn total_distance(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.distance)).sum()
    }

    /// Sum of all edge durations.
    pub fn total_duration(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.duration)).sum()
    }

    /// Station ids in visiting order: the origin, then every edge's arrival.
    ///
    /// Always one longer than the edge count.
    pub fn ordered_station_ids(&self) -> Vec<StationId> {
        std::iter::once(self.origin())
            .chain(self.edges.iter().map(|e| e.to))
            .collect()
    }

    /// Lines touched by this path, each exactly once, in first-traversed order.
    ///
    /// A line re-entered after a transfer still appears once.
    pub fn distinct_lines(&self) -> Vec<LineId> {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges
            .iter()
            .map(|e| e.line)
            .filter(|line| seen.insert(*line))
            .collect()
    }
}
