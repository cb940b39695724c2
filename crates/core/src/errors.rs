use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    pub fn configuration(message: impl Into<String>) -> Self {
        BookingError::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        BookingError::Validation(message.into())
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
