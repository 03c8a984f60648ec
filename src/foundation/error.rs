pub type MonogramResult<T> = Result<T, MonogramError>;

#[derive(thiserror::Error, Debug)]
pub enum MonogramError {
    /// The requested avatar file does not exist and cannot or will not be
    /// generated.
    #[error("avatar file not found")]
    NotFound,

    /// The backing store denied a write or delete.
    #[error("store operation not permitted: {0}")]
    NotPermitted(String),

    /// Fatal renderer failure. Not expected in normal operation.
    #[error("rendering error: {0}")]
    Rendering(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MonogramError {
    pub fn not_permitted(msg: impl Into<String>) -> Self {
        Self::NotPermitted(msg.into())
    }

    pub fn rendering(msg: impl Into<String>) -> Self {
        Self::Rendering(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Return `true` for the variant callers are expected to branch on.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
