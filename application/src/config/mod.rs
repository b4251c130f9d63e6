//! Application-level configuration.
//!
//! - [`SelectorConfig`]: matching and drawing behaviour of the quote selector

pub mod selector_config;

pub use selector_config::SelectorConfig;
