use thiserror::Error;

/// Error type that captures profile-loading and generation failures.
#[derive(Debug, Error)]
pub enum SpendingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("profile `{0}` not found")]
    ProfileNotFound(String),
    #[error("no amount range for category `{0}`")]
    UnknownCategory(String),
    #[error("`{0}` is not one of the seven day names")]
    UnknownDay(String),
    #[error("category list is empty, nothing to draw random spendings from")]
    EmptyCategories,
}
