//! Transit fare server.
//!
//! Turns a computed route through a transit network into the traveler-facing
//! summary: ordered stations, total duration and distance, and the fare owed.

pub mod config;
pub mod domain;
pub mod fare;
pub mod network;
pub mod summary;
pub mod web;
