//! HTTP API surface.

pub mod health;
pub mod resolve;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

/// Build the application router with CORS and request tracing applied.
///
/// CORS is deliberately wide open: any origin, method, and headers. The
/// layer also answers pre-flight `OPTIONS` requests itself.
pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", health::router().merge(resolve::router()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
