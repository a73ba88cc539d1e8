use crate::blog::{Post, PostId};
use crate::state::SharedState;
use crate::store::StoreError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub(super) async fn list(State(state): SharedState) -> Result<Json<Vec<Post>>, StatusCode> {
    match state.store.all_posts().await {
        Ok(posts) => Ok(Json(posts)),
        Err(err) => {
            tracing::error!("error listing posts: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostId>,
) -> Result<Json<Post>, StatusCode> {
    match state.store.post(post_id).await {
        Ok(post) => Ok(Json(post)),
        Err(StoreError::NotFound(_)) => Err(StatusCode::NOT_FOUND),
        Err(err) => {
            tracing::error!("error loading post {post_id}: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
