//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No quotes loaded")]
    EmptyCorpus,

    #[error("No quotes found for '{0}'")]
    NoMatch(String),

    #[error("Invalid quote record: {0}")]
    InvalidQuote(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown aspect '{aspect}' for theme {theme}")]
    UnknownAspect { theme: String, aspect: String },
}

impl DomainError {
    /// Check if this error means nothing could be selected at all
    pub fn is_empty_corpus(&self) -> bool {
        matches!(self, DomainError::EmptyCorpus)
    }
}
