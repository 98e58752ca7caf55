//! In-memory network snapshot.
//!
//! Loads stations, lines, and precomputed routes from a JSON file and
//! serves them through the collaborator traits the fare core consumes.

mod error;
mod snapshot;

pub use error::NetworkError;
pub use snapshot::{LineRecord, NetworkSnapshot, RouteRecord};
