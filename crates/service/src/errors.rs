use thiserror::Error;

/// Business errors for account and message workflows.
///
/// The kinds stay distinguishable for logging and tests; the HTTP boundary
/// collapses them into its empty-body 400/401 channel.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("username already taken")]
    Conflict,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unauthorized => 1004,
            ServiceError::Repository(_) => 1200,
        }
    }
}
