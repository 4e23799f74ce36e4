use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body is JSON but not the expected shape.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self { Self::Validation(e.to_string()) }
}
