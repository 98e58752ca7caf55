//! Path summary assembly.
//!
//! Composes a validated path, resolved station records, and the computed
//! fare into the traveler-facing summary. `FareService::compute_summary`
//! is the single entry point that runs the whole pipeline.

mod assemble;
mod collaborators;
mod error;
mod service;

pub use assemble::{PathSummary, assemble};
pub use collaborators::{LineSurchargeLookup, NoPathFound, PathFinder, PathType, StationLookup};
pub use error::SummaryError;
pub use service::{FareService, PathQuery};
