//! Selector configuration.

use quotes_domain::{NoMatchPolicy, SynonymTable};

/// Controls how [`QuoteSelector`](crate::QuoteSelector) matches and draws.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// What to do when a category matches nothing
    pub no_match: NoMatchPolicy,
    /// Category expansion table
    pub synonyms: SynonymTable,
    /// Fixed RNG seed for reproducible draws; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            no_match: NoMatchPolicy::default(),
            synonyms: SynonymTable::builtin(),
            seed: None,
        }
    }
}

impl SelectorConfig {
    pub fn with_no_match(mut self, policy: NoMatchPolicy) -> Self {
        self.no_match = policy;
        self
    }

    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Match categories literally, without synonym expansion
    pub fn without_synonyms(self) -> Self {
        self.with_synonyms(SynonymTable::empty())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_synonyms() {
        let config = SelectorConfig::default();
        assert_eq!(config.no_match, NoMatchPolicy::NoneFound);
        assert_eq!(config.synonyms, SynonymTable::builtin());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builders() {
        let config = SelectorConfig::default()
            .with_no_match(NoMatchPolicy::WholeCorpus)
            .without_synonyms()
            .with_seed(3);
        assert_eq!(config.no_match, NoMatchPolicy::WholeCorpus);
        assert!(config.synonyms.is_empty());
        assert_eq!(config.seed, Some(3));
    }
}
