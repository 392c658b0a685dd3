//! Error types for the history engine.

use thiserror::Error;

/// Errors that can occur around a history engine.
///
/// The engine itself never fails. These surface at the edges: converting
/// typed documents to and from JSON, loading configuration, and reading
/// change records from outside the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutatorError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for MutatorError {
    fn from(err: serde_json::Error) -> Self {
        MutatorError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MutatorError>;
