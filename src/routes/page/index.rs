use crate::render::{IndexPage, PostSummary};
use crate::state::SharedState;
use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

pub(super) async fn get(State(state): SharedState) -> Result<Html<String>, StatusCode> {
    let posts = match state.store.all_posts().await {
        Ok(it) => it,
        Err(err) => {
            tracing::error!("error listing posts: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let page = IndexPage {
        posts: posts.into_iter().map(PostSummary::from).collect(),
    };

    match page.render() {
        Ok(html) => Ok(Html(html)),
        Err(err) => {
            tracing::error!("error rendering listing page: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
