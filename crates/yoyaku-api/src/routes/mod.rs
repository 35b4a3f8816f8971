//! API routes.

pub mod health;

use axum::Router;
use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

/// Build the main router.
///
/// The CORS layer answers every OPTIONS request directly as a preflight,
/// before any handler or database work happens.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
