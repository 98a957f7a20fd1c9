use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemRepositoryError {
    #[error("item not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}
