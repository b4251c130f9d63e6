//! Quote entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single quote from the corpus (Value Object)
///
/// Quotes are loaded once when the corpus is read and are never mutated
/// afterwards. Category matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    content: String,
    #[serde(default)]
    author: String,
    /// Bundled data files name this field `category`
    #[serde(default, alias = "category")]
    categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<usize>,
}

impl Quote {
    /// Create a new quote
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            length: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Length of the quote text in characters.
    ///
    /// Uses the length recorded in the source data when present.
    pub fn length(&self) -> usize {
        self.length.unwrap_or_else(|| self.content.chars().count())
    }

    /// Reject records that cannot be shown: the content must not be blank
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.content.trim().is_empty() {
            return Err(DomainError::InvalidQuote(format!(
                "empty content (author: '{}')",
                self.author
            )));
        }
        Ok(())
    }

    /// Check whether any of this quote's categories equals `term`, ignoring case
    pub fn has_category(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        self.categories
            .iter()
            .any(|c| c.trim().to_lowercase() == term)
    }

    /// Check whether any category matches any of the given terms
    pub fn matches_any<'a>(&self, mut terms: impl Iterator<Item = &'a str>) -> bool {
        terms.any(|term| self.has_category(term))
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.author.is_empty() {
            write!(f, "\"{}\"", self.content)
        } else {
            write!(f, "\"{}\" - {}", self.content, self.author)
        }
    }
}
