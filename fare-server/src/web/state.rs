//! Application state for the web layer.

use std::sync::Arc;

use crate::summary::{FareService, LineSurchargeLookup, PathFinder, StationLookup};

/// Shared application state.
///
/// Contains the collaborators and pricing service needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route source
    pub finder: Arc<dyn PathFinder>,

    /// Station display records
    pub stations: Arc<dyn StationLookup>,

    /// Per-line surcharges
    pub lines: Arc<dyn LineSurchargeLookup>,

    /// Fare computation
    pub fares: Arc<FareService>,
}

impl AppState {
    /// Create a state where one network value serves all three lookups.
    pub fn new<N>(network: N, fares: FareService) -> Self
    where
        N: PathFinder + StationLookup + LineSurchargeLookup + 'static,
    {
        let network = Arc::new(network);
        Self {
            finder: network.clone(),
            stations: network.clone(),
            lines: network,
            fares: Arc::new(fares),
        }
    }
}
