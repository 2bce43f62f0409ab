use thiserror::Error;

pub type Result<T> = std::result::Result<T, InvokerError>;

/// Requests rejected before grep is spawned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Target must be a directory for this operation: {0}")]
    NotADirectory(String),

    #[error("This command contains potentially unsafe flags. Please use the specific grep tools for safety.")]
    UnsafeFlag(String),
}
