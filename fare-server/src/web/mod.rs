//! Web layer for the fare server.
//!
//! Provides the HTTP endpoint that returns a path summary with its fare.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
