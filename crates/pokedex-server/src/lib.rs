//! HTTP boundary for the Pokemon Explorer backend.
//!
//! Routing, query defaulting, status mapping, and CORS live here; all
//! aggregation happens in [`pokedex_core`]. The binary in `main.rs` wires
//! configuration and tracing around [`routes::app`].

pub mod error;
pub mod routes;

pub use error::ServerError;
pub use routes::{AppState, app};
