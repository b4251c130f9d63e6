//! Behaviour when a requested category has no matching quotes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What selection does when no quote matches the requested category.
///
/// Exactly one policy applies per selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchPolicy {
    /// Report that nothing was found (default)
    #[default]
    NoneFound,
    /// Return a uniformly random quote from the whole corpus, untracked
    WholeCorpus,
}

impl NoMatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoMatchPolicy::NoneFound => "none",
            NoMatchPolicy::WholeCorpus => "whole_corpus",
        }
    }
}

impl std::fmt::Display for NoMatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoMatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "none_found" | "nothing" => Ok(NoMatchPolicy::NoneFound),
            "whole_corpus" | "whole-corpus" | "any" | "random" => Ok(NoMatchPolicy::WholeCorpus),
            _ => Err(format!(
                "Invalid no-match policy: {}. Valid options: none, whole_corpus",
                s
            )),
        }
    }
}
