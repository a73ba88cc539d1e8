use crate::state::State;
use axum::Router;
use std::sync::Arc;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

pub mod blog;
pub mod config;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;

/// The whole service: listing and detail pages at the root, the JSON
/// mirror under `/api`. Trailing slashes are trimmed outside the router
/// so `/2/` and `/2` both reach the detail handler.
pub fn app(state: Arc<State>) -> NormalizePath<Router> {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    NormalizePathLayer::trim_trailing_slash().layer(
        Router::new()
            .merge(routes::page::route())
            .nest("/api", routes::api::route())
            .with_state(state)
            .layer(cors),
    )
}
