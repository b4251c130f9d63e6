//! Synonym expansion for category matching
//!
//! A requested category also matches quotes tagged with any of its related
//! terms. The table is plain data: built-in entries can be extended or
//! replaced from configuration.

use std::collections::BTreeMap;

use super::category::CategoryKey;

/// Built-in expansion entries, keyed by normalized category
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("motivation", &["inspiration", "potential", "passion", "action"]),
    ("inspiration", &["motivation", "creativity", "hope"]),
    ("love", &["romance", "heart"]),
    ("life", &["living", "purpose"]),
    ("self", &["identity", "authenticity", "self-knowledge"]),
    ("shadow", &["darkness", "fear", "unconscious"]),
    ("mindfulness", &["awareness", "presence", "meditation"]),
    ("compassion", &["kindness", "empathy"]),
    ("virtue", &["character", "integrity", "ethics"]),
    ("resilience", &["perseverance", "strength", "courage"]),
    ("peace", &["calm", "serenity"]),
];

/// Mapping from normalized category to the extra terms it matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Table without any expansion: categories only match themselves
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table with the built-in entries
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (category, terms) in BUILTIN_SYNONYMS {
            table.insert(*category, terms.iter().copied());
        }
        table
    }

    /// Add terms for a category, merging with any existing entry.
    ///
    /// Keys and terms are normalized; blank and duplicate terms are dropped.
    pub fn insert(
        &mut self,
        category: &str,
        terms: impl IntoIterator<Item = impl AsRef<str>>,
    ) {
        let key = CategoryKey::from(category);
        let Some(key) = key.filter() else {
            return;
        };
        let entry = self.entries.entry(key.to_string()).or_default();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && term != key && !entry.contains(&term) {
                entry.push(term);
            }
        }
    }

    /// Builder-style [`SynonymTable::insert`]
    pub fn with_entry(
        mut self,
        category: &str,
        terms: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        self.insert(category, terms);
        self
    }

    /// Extra terms for a category (not including the category itself)
    pub fn synonyms_of(&self, key: &CategoryKey) -> &[String] {
        self.entries
            .get(key.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All terms a category matches: the category first, then its synonyms
    pub fn expand<'a>(&'a self, key: &'a CategoryKey) -> impl Iterator<Item = &'a str> + Clone {
        std::iter::once(key.as_str()).chain(self.synonyms_of(key).iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
