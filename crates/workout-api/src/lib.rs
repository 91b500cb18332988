//! Workout API — HTTP server library.
//!
//! Exposes the route table, configuration and server plumbing so the binary
//! and the integration tests build the application the same way.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;
