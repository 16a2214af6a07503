use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}

/// Classify a raw database error (unique violations become conflicts).
pub fn db_err(e: DbErr) -> ServiceError {
    match ModelError::from(e) {
        ModelError::Conflict(m) => ServiceError::Conflict(m),
        ModelError::Validation(m) => ServiceError::Validation(m),
        ModelError::Db(m) => ServiceError::Db(m),
    }
}

impl From<object_store::Error> for ServiceError {
    fn from(e: object_store::Error) -> Self {
        match e {
            object_store::Error::NotFound { path, .. } => ServiceError::NotFound(format!("{path} not found")),
            other => ServiceError::Storage(other.to_string()),
        }
    }
}
