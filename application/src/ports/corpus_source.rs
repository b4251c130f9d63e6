//! Corpus source port
//!
//! Defines where the quote corpus comes from. Infrastructure adapters read it
//! from a JSON file or from data bundled into the binary; tests hand over a
//! list directly through [`InMemoryCorpus`].

use quotes_domain::Quote;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed corpus {origin}: {message}")]
    Malformed { origin: String, message: String },
}

/// Port for loading the quote corpus once at startup.
///
/// The selector treats any error as a degraded-but-running state with an
/// empty corpus, so implementations should not retry or fall back on their
/// own.
pub trait CorpusSource: Send + Sync {
    /// Human-readable origin for diagnostics (a path, "bundled", ...)
    fn origin(&self) -> String;

    /// Load all quote records
    fn load(&self) -> Result<Vec<Quote>, CorpusError>;
}

/// Corpus held in memory, for tests and embedding hosts
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    quotes: Vec<Quote>,
}

impl InMemoryCorpus {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }
}

impl CorpusSource for InMemoryCorpus {
    fn origin(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<Vec<Quote>, CorpusError> {
        Ok(self.quotes.clone())
    }
}
