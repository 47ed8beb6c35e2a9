//! Medialink HTTP server.
//!
//! Exposes the resolver crate behind a small JSON API:
//! - `GET /api/resolve?url=...` - resolve a video URL into streaming links
//! - `GET /api/health` - liveness probe

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;

pub use main_lib::{build_state, init_tracing, AppState};
