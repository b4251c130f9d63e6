//! Quote corpus and candidate filtering

use super::category::CategoryKey;
use super::entities::Quote;
use super::synonyms::SynonymTable;

/// Immutable collection of quotes loaded at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteCorpus {
    quotes: Vec<Quote>,
}

impl QuoteCorpus {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    /// Quotes matching `key`, in corpus order.
    ///
    /// [`CategoryKey::ALL`] yields the whole corpus. Otherwise a quote matches
    /// when one of its categories equals the key or one of the key's synonyms.
    pub fn candidates(&self, key: &CategoryKey, synonyms: &SynonymTable) -> Vec<&Quote> {
        if key.is_all() {
            return self.quotes.iter().collect();
        }
        let terms = synonyms.expand(key);
        self.quotes
            .iter()
            .filter(|q| q.matches_any(terms.clone()))
            .collect()
    }

    /// Distinct categories across the corpus, lowercased and sorted
    pub fn categories(&self) -> Vec<String> {
        let mut all: Vec<String> = self
            .quotes
            .iter()
            .flat_map(|q| q.categories().iter().map(|c| c.trim().to_lowercase()))
            .filter(|c| !c.is_empty())
            .collect();
        all.sort();
        all.dedup();
        all
    }
}

impl From<Vec<Quote>> for QuoteCorpus {
    fn from(quotes: Vec<Quote>) -> Self {
        Self::new(quotes)
    }
}
