use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// A blog entry. Posts are written and deleted by tooling outside this
/// server; everything here only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Markdown source, rendered to HTML for the detail page.
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
