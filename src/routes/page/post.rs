use crate::blog::PostId;
use crate::render::{self, PostBody, PostPage};
use crate::state::SharedState;
use crate::store::StoreError;
use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostId>,
) -> Result<Html<String>, StatusCode> {
    let post = match state.store.post(post_id).await {
        Ok(it) => it,
        Err(StoreError::NotFound(_)) => return Err(StatusCode::NOT_FOUND),
        Err(err) => {
            tracing::error!("error loading post {post_id}: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let body_html = match render::markdown_to_html(post.body).await {
        Ok(it) => it,
        Err(err) => {
            tracing::error!("error rendering Markdown for post {post_id}: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let page = PostPage {
        post: PostBody {
            id: post.id,
            title: post.title,
            created_at: post.created_at.format("%Y-%m-%d").to_string(),
            body_html,
        },
    };

    match page.render() {
        Ok(html) => Ok(Html(html)),
        Err(err) => {
            tracing::error!("error rendering page for post {post_id}: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
