use crate::blog::{Post, PostId};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no post with id {0}")]
    NotFound(PostId),
    #[error("error reading post store: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed post file {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Posts live as `<id>.json` files in a single directory. The directory is
/// owned by whatever writes the posts; this handle never mutates it.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Store {
        Store { root: root.into() }
    }

    fn post_path(&self, post_id: PostId) -> PathBuf {
        self.root.join(format!("{post_id}.json"))
    }

    /// Every stored post, newest id first.
    pub async fn all_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut posts = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            let bytes = tokio::fs::read(&path).await?;
            match serde_json::from_slice::<Post>(&bytes) {
                Ok(post) => posts.push(post),
                Err(source) => return Err(StoreError::Decode { path, source }),
            }
        }

        posts.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    /// The post with exactly this id.
    pub async fn post(&self, post_id: PostId) -> Result<Post, StoreError> {
        let path = self.post_path(post_id);

        let bytes = match tokio::fs::read(&path).await {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(post_id))
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode { path, source })
    }
}
