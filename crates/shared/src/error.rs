//! Error types for DVNC

use thiserror::Error;

/// Error thrown when a domain expert is registered without any concepts
#[derive(Debug, Error)]
#[error("Knowledge base for domain '{domain}' is empty")]
pub struct EmptyKnowledgeBaseError {
    pub domain: String,
}

/// Error thrown when a knowledge table lists the same concept twice
#[derive(Debug, Error)]
#[error("Concept '{concept}' is defined more than once in domain '{domain}'")]
pub struct DuplicateConceptError {
    pub domain: String,
    pub concept: String,
}

/// General DVNC error type
#[derive(Debug, Error)]
pub enum DvncError {
    #[error(transparent)]
    EmptyKnowledgeBase(#[from] EmptyKnowledgeBaseError),

    #[error(transparent)]
    DuplicateConcept(#[from] DuplicateConceptError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DvncError>;
