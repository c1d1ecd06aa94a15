//! Error types for the Aegis market

use thiserror::Error;

/// Application-wide error type
///
/// Expected "not found" outcomes are never represented as errors; repository
/// lookups return `Ok(None)` / `Ok(false)` for those. The variants here cover
/// genuinely unexpected faults and boundary validation.
#[derive(Error, Debug)]
pub enum AegisError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AegisError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AegisError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AegisError::Validation(msg.into())
    }

    pub fn repository(msg: impl Into<String>) -> Self {
        AegisError::Repository(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AegisError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AegisError::Internal(msg.into())
    }
}

/// Result type alias for application operations
pub type AegisResult<T> = Result<T, AegisError>;
