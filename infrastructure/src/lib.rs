//! Infrastructure layer for tile-quotes
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod corpus;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileCorpusConfig, FileOutputConfig, FileOutputFormat,
    FileSelectionConfig,
};
pub use corpus::{BundledCorpus, JsonFileCorpus, parse_quotes};
