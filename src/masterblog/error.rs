use crate::model::Field;
use thiserror::Error;

/// Failure of the storage medium behind a [`crate::store::PostStore`].
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Missing field: '{0}' is required")]
    MissingField(Field),

    #[error("Empty field: '{0}' must not be blank")]
    EmptyField(Field),

    #[error("Unknown field: '{0}' is not accepted")]
    UnknownField(String),

    #[error("Post with id {0} was not found")]
    NotFound(u64),

    #[error("Sorting by '{0}' is not allowed")]
    InvalidSortKey(String),

    #[error("Direction '{0}' is not allowed")]
    InvalidDirection(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for BlogError {
    fn from(err: std::io::Error) -> Self {
        BlogError::StorageUnavailable(StorageError::Io(err))
    }
}

impl From<serde_json::Error> for BlogError {
    fn from(err: serde_json::Error) -> Self {
        BlogError::StorageUnavailable(StorageError::Serialization(err))
    }
}

/// Fieldless mirror of [`BlogError`] for clients that map failures onto
/// their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingField,
    EmptyField,
    UnknownField,
    NotFound,
    InvalidSortKey,
    InvalidDirection,
    StorageUnavailable,
    Config,
}

impl ErrorKind {
    /// Stable identifier, safe to expose to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingField => "missing_field",
            ErrorKind::EmptyField => "empty_field",
            ErrorKind::UnknownField => "unknown_field",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidSortKey => "invalid_sort_key",
            ErrorKind::InvalidDirection => "invalid_direction",
            ErrorKind::StorageUnavailable => "storage_unavailable",
            ErrorKind::Config => "config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BlogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::MissingField(_) => ErrorKind::MissingField,
            BlogError::EmptyField(_) => ErrorKind::EmptyField,
            BlogError::UnknownField(_) => ErrorKind::UnknownField,
            BlogError::NotFound(_) => ErrorKind::NotFound,
            BlogError::InvalidSortKey(_) => ErrorKind::InvalidSortKey,
            BlogError::InvalidDirection(_) => ErrorKind::InvalidDirection,
            BlogError::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            BlogError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
