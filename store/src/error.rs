use thiserror::Error;

/// Errors surfaced by forum operations.
///
/// Validation failures abort before anything is written, so a returned error
/// never leaves a partial write behind.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("thread not found: {id}")]
    ThreadNotFound { id: i64 },

    #[error("comment not found: {id}")]
    CommentNotFound { id: i64 },

    #[error("thread {id} is locked. No further interactions are allowed")]
    ThreadLocked { id: i64 },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("you must be logged in to do that")]
    NotLoggedIn,

    #[error("thread {id} is not a QNA thread")]
    NotQna { id: i64 },

    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("no user found. Please register")]
    NoRegisteredUser,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
