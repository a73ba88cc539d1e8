use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use miniblog::blog::{Post, PostId};
use miniblog::state::State;
use miniblog::store::Store;
use std::sync::Arc;
use tower::ServiceExt;

fn seed(dir: &std::path::Path, id: PostId, title: &str, body: &str) {
    let post = Post {
        id,
        title: title.to_owned(),
        body: body.to_owned(),
        created_at: chrono::Utc::now(),
    };
    std::fs::write(
        dir.join(format!("{id}.json")),
        serde_json::to_vec(&post).unwrap(),
    )
    .unwrap();
}

async fn get(dir: &std::path::Path, uri: &str) -> Response {
    miniblog::app(Arc::new(State::new(Store::new(dir))))
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn listing_orders_posts_newest_id_first() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 1, "oldest", "a");
    seed(dir.path(), 2, "middle", "b");
    seed(dir.path(), 3, "newest", "c");

    let response = get(dir.path(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    let newest = html.find("newest").unwrap();
    let middle = html.find("middle").unwrap();
    let oldest = html.find("oldest").unwrap();
    assert!(newest < middle && middle < oldest);
}

#[tokio::test]
async fn listing_links_each_post_detail_page() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 5, "linked", "a");

    let html = body_string(get(dir.path(), "/").await).await;
    assert!(html.contains("href=\"/5/\""));
}

#[tokio::test]
async fn empty_store_renders_an_empty_listing() {
    let dir = tempfile::tempdir().unwrap();

    let response = get(dir.path(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(!html.contains("<li>"));
}

#[tokio::test]
async fn detail_page_shows_the_requested_post() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 1, "other post", "plain");
    seed(dir.path(), 2, "the second post", "some **bold** text");

    let response = get(dir.path(), "/2/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("the second post"));
    assert!(html.contains("<strong>bold</strong>"));
    assert!(!html.contains("other post"));
}

#[tokio::test]
async fn detail_page_without_trailing_slash_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 2, "the second post", "text");

    let response = get(dir.path(), "/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("the second post"));
}

#[tokio::test]
async fn missing_post_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 1, "only post", "text");

    let response = get(dir.path(), "/99/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_string(response).await;
    assert!(!html.contains("only post"));
}

#[tokio::test]
async fn non_integer_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let response = get(dir.path(), "/not-a-number/").await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn api_lists_posts_newest_id_first() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 1, "oldest", "a");
    seed(dir.path(), 3, "newest", "c");
    seed(dir.path(), 2, "middle", "b");

    let response = get(dir.path(), "/api/posts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let posts: Vec<Post> = serde_json::from_str(&body_string(response).await).unwrap();
    let ids = posts.iter().map(|post| post.id).collect::<Vec<_>>();
    assert_eq!(ids, [3, 2, 1]);
}

#[tokio::test]
async fn api_post_by_id() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), 2, "the second post", "text");

    let response = get(dir.path(), "/api/post/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let post: Post = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(post.id, 2);
    assert_eq!(post.title, "the second post");
}

#[tokio::test]
async fn api_missing_post_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let response = get(dir.path(), "/api/post/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
