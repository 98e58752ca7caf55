//! Domain types for fare derivation.
//!
//! This module contains the value types that describe a computed route:
//! the traversed edges, the path they form, and the identifiers of the
//! stations and lines involved. Types enforce their invariants at
//! construction time, so code that receives a `Path` can trust it.

mod edge;
mod error;
mod line;
mod path;
mod station;

pub use edge::Edge;
pub use error::PathError;
pub use line::LineId;
pub use path::Path;
pub use station::{StationDisplay, StationId};
