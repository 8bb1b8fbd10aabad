use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Backend responded with status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl TimetableError {
    /// Builds the error for a non-success HTTP status returned by the backend.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => TimetableError::Validation(message),
            401 => TimetableError::Authentication(message),
            403 => TimetableError::Authorization(message),
            404 => TimetableError::NotFound(message),
            _ => TimetableError::Upstream { status, message },
        }
    }
}

pub type TimetableResult<T> = Result<T, TimetableError>;
