//! Corpus configuration from TOML (`[corpus]` section)

use quotes_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw corpus configuration from TOML
///
/// # Example
///
/// ```toml
/// [corpus]
/// path = "~/quotes/quotes.json"   # omit to use the bundled corpus
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    /// JSON corpus file; `None` selects the bundled corpus
    pub path: Option<String>,
}

impl FileCorpusConfig {
    /// Resolve the configured path, expanding a leading `~/`.
    ///
    /// A blank path counts as unset and is reported as an issue.
    pub fn resolve_path(&self) -> (Option<PathBuf>, Vec<ConfigIssue>) {
        match self.path.as_deref().map(str::trim) {
            None => (None, vec![]),
            Some("") => (
                None,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::EmptyCorpusPath,
                    "corpus.path is empty, using the bundled corpus",
                )],
            ),
            Some(path) => (Some(expand_home(path)), vec![]),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
