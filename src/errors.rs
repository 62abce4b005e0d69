use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Attempt closed: {0}")]
    AttemptClosed(String),

    #[error("Stale generation: {0}")]
    StaleGeneration(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
