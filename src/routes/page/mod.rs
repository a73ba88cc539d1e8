use crate::state::NestedRouter;
use axum::routing::get;

mod index;
mod post;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(index::get))
        .route("/:id", get(post::get))
}
