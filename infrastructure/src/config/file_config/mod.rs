//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod corpus;
mod output;
mod selection;

pub use corpus::FileCorpusConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use selection::FileSelectionConfig;

use quotes_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where quotes come from
    pub corpus: FileCorpusConfig,
    /// Matching and drawing settings
    pub selection: FileSelectionConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue here is non-fatal: the offending value falls back to its
    /// default when the configuration is applied.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.corpus.resolve_path().1);
        issues.extend(self.selection.to_selector_config().1);
        issues
    }
}
