//! Category key value object

use serde::{Deserialize, Serialize};

/// Normalized category name that partitions usage tracking.
///
/// Keys are trimmed and lowercased, so `"Love"` and `" love "` share a key.
/// The sentinel [`CategoryKey::ALL`] stands for "no category filter"; a blank
/// category or the literal `all` in any case resolves to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Key used for unfiltered selection
    pub const ALL: &'static str = "all";

    /// Resolve the key for an optional requested category
    pub fn resolve(category: Option<&str>) -> Self {
        match category.map(str::trim) {
            Some(c) if !c.is_empty() => Self(c.to_lowercase()),
            _ => Self::all(),
        }
    }

    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Whether this key selects the whole corpus
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category filter this key stands for, `None` for [`CategoryKey::ALL`]
    pub fn filter(&self) -> Option<&str> {
        if self.is_all() { None } else { Some(&self.0) }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(s: &str) -> Self {
        Self::resolve(Some(s))
    }
}

impl From<Option<&str>> for CategoryKey {
    fn from(s: Option<&str>) -> Self {
        Self::resolve(s)
    }
}
