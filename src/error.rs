/// Error types for bookmark operations
use crate::bookmark_data::RowId;
use thiserror::Error;

/// Rejected user input. The display text is what the user is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please provide both name and URL.")]
    MissingField,
    #[error("Please enter a Valid URL starting with http:// or https://")]
    InvalidScheme,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("no bookmark row with id {0}")]
    RowNotFound(RowId),
}
