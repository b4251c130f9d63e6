//! Domain layer for tile-quotes
//!
//! This crate contains the core selection logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Rounds
//!
//! Every category key (the lowercased category, or `all` for no filter) has its
//! own round of draws. Within a round a quote is never returned twice; once
//! every candidate has been shown the round starts over.
//!
//! ## Synonyms
//!
//! A category also matches quotes tagged with related terms, e.g. `motivation`
//! matches `inspiration`, `potential`, `passion` and `action`.

pub mod catalog;
pub mod config;
pub mod core;
pub mod quote;

// Re-export commonly used types
pub use catalog::{Theme, aspects_of, find_theme, resolve_keyword, themes};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{error::DomainError, string::preview};
pub use quote::{
    category::CategoryKey,
    corpus::QuoteCorpus,
    entities::Quote,
    policy::NoMatchPolicy,
    synonyms::SynonymTable,
    usage::{Pick, UsageTracker},
};
