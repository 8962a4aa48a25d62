use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed telemetry message: {reason}")]
    MalformedMessage { reason: String },

    #[error("Storage error for key {key}: {reason}")]
    Storage { key: String, reason: String },

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Publish error: {0}")]
    Publish(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
