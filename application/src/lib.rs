//! Application layer for tile-quotes
//!
//! This crate contains the quote selector, the use cases built on it, and the
//! port for loading a corpus. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SelectorConfig;
pub use ports::corpus_source::{CorpusError, CorpusSource, InMemoryCorpus};
pub use use_cases::fetch_quote::{FetchQuoteUseCase, LOADING_TEXT, QuoteView};
pub use use_cases::select_quote::QuoteSelector;
