//! Corpus source adapters
//!
//! Implementations of [`CorpusSource`](quotes_application::CorpusSource):
//! a JSON file on disk and the JSON corpus bundled into the binary.

mod json_file;

pub use json_file::{BundledCorpus, JsonFileCorpus, parse_quotes};
