use crate::blog::{Post, PostId};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub posts: Vec<PostSummary>,
}

/// One row of the listing page.
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub created_at: String,
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> PostSummary {
        PostSummary {
            id: post.id,
            title: post.title,
            created_at: post.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostPage {
    pub post: PostBody,
}

pub struct PostBody {
    pub id: PostId,
    pub title: String,
    pub created_at: String,
    /// Already-rendered HTML, inserted unescaped by the template.
    pub body_html: String,
}

/// Renders a post's Markdown body. Parsing runs on the blocking pool since
/// comrak is synchronous.
pub async fn markdown_to_html(markdown: String) -> std::io::Result<String> {
    tokio::task::spawn_blocking(move || {
        let arena = comrak::Arena::new();
        let root = comrak::parse_document(&arena, &markdown, &comrak::Options::default());

        let mut html = Vec::new();
        comrak::format_html(root, &comrak::Options::default(), &mut html)?;

        Ok(String::from_utf8(html).expect("comrak output should be utf-8"))
    })
    .await
    .expect("task should not panic")
}
