use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("content must not be empty")]
    EmptyContent,
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}
