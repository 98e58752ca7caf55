//! Summary orchestration.

use tracing::debug;

use crate::domain::{Edge, Path, StationId};
use crate::fare::{DiscountTable, FareError, FareTable, LineSurcharges, RiderCategory};

use super::assemble::{PathSummary, assemble};
use super::collaborators::{LineSurchargeLookup, PathFinder, PathType, StationLookup};
use super::error::SummaryError;

/// A request for the summary between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathQuery {
    pub source: StationId,
    pub target: StationId,
    pub path_type: PathType,
    pub rider: RiderCategory,
}

/// Turns raw edge sequences into path summaries.
///
/// Holds only read-only pricing configuration, so one instance can be
/// shared across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct FareService {
    fares: FareTable,
    discounts: DiscountTable,
}

impl FareService {
    /// Create a service with the given pricing configuration.
    pub fn new(fares: FareTable, discounts: DiscountTable) -> Self {
        Self { fares, discounts }
    }

    /// Returns the fare table in use.
    pub fn fares(&self) -> &FareTable {
        &self.fares
    }

    /// Returns the discount table in use.
    pub fn discounts(&self) -> &DiscountTable {
        &self.discounts
    }

    /// Compute the fare owed for `path`.
    pub fn fare_for<L>(
        &self,
        path: &Path,
        lines: &L,
        rider: RiderCategory,
    ) -> Result<u64, SummaryError>
    where
        L: LineSurchargeLookup + ?Sized,
    {
        let surcharges = LineSurcharges::for_path(path, |line| lines.surcharge(line));
        let total_distance = path.total_distance();
        let distance = i64::try_from(total_distance)
            .map_err(|_| FareError::DistanceOutOfRange(total_distance))?;

        let breakdown = self.fares.calculate(distance, &surcharges)?;
        let fare = self.discounts.apply(breakdown.total(), rider);

        debug!(
            distance = total_distance,
            base = breakdown.base,
            distance_surcharge = breakdown.distance_surcharge,
            line_surcharge = breakdown.line_surcharge,
            ?rider,
            fare,
            "computed fare"
        );

        Ok(fare)
    }

    /// Build the full summary for an edge sequence.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the edges don't form a path, the fare can't be
    /// computed, or any station on the path has no display record.
    pub fn compute_summary<S, L>(
        &self,
        edges: Vec<Edge>,
        stations: &S,
        lines: &L,
        rider: RiderCategory,
    ) -> Result<PathSummary, SummaryError>
    where
        S: StationLookup + ?Sized,
        L: LineSurchargeLookup + ?Sized,
    {
        let path = Path::new(edges)?;
        let fare = self.fare_for(&path, lines, rider)?;
        let records = stations.find_stations(&path.ordered_station_ids());

        assemble(&path, &records, fare)
    }

    /// Ask `finder` for a route, then summarise it.
    ///
    /// A missing route is propagated as [`SummaryError::NoPath`].
    pub fn find_summary<F, S, L>(
        &self,
        query: &PathQuery,
        finder: &F,
        stations: &S,
        lines: &L,
    ) -> Result<PathSummary, SummaryError>
    where
        F: PathFinder + ?Sized,
        S: StationLookup + ?Sized,
        L: LineSurchargeLookup + ?Sized,
    {
        let edges = finder.find_path(query.source, query.target, query.path_type)?;
        debug!(
            source = %query.source,
            target = %query.target,
            path_type = %query.path_type,
            edges = edges.len(),
            "found path"
        );

        self.compute_summary(edges, stations, lines, query.rider)
    }
}
