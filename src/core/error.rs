use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
