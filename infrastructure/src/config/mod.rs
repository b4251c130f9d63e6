//! Configuration file loading for tile-quotes
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./tile-quotes.toml` or `./.tile-quotes.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/tile-quotes/config.toml`
//! 4. Fallback: `~/.config/tile-quotes/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileCorpusConfig, FileOutputConfig, FileOutputFormat, FileSelectionConfig,
};
pub use loader::ConfigLoader;
