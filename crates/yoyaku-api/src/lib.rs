//! HTTP server for the Yoyaku reservation API.
//!
//! Exposes the two connectivity-check endpoints and wires them to the
//! database layer.

pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;
