use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid input")]
    Invalid,

    #[error("file too large")]
    FileTooLarge,

    #[error("classifier is not configured")]
    ClassifierUnavailable,

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("internal server error")]
    InternalServerError,
}
