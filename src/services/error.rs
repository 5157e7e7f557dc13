use std::collections::BTreeMap;
use thiserror::Error;

/// Field name -> human-readable message, serialized verbatim into 422 bodies.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// The title normalized to an empty slug.
    #[error("title must contain at least one letter or number")]
    InvalidTitle,

    #[error(transparent)]
    Database(#[from] rusqlite::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.into());
        Self::Validation(errors)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// True when the storage layer rejected a write because of a UNIQUE index,
/// which the slug pipeline treats as retryable.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
