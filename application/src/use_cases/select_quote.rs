//! Quote selection
//!
//! [`QuoteSelector`] owns the corpus and the per-category rounds. It is built
//! once at startup and then shared (by reference or `Arc`) with whatever needs
//! quotes. Selection never fails loudly: every problem resolves to "no quote"
//! plus a `tracing` diagnostic.

use crate::config::SelectorConfig;
use crate::ports::corpus_source::CorpusSource;
use quotes_domain::{
    CategoryKey, DomainError, NoMatchPolicy, Quote, QuoteCorpus, SynonymTable, UsageTracker,
    preview,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Mutable selection state, guarded by a single lock
#[derive(Debug)]
struct SelectionState {
    usage: UsageTracker,
    rng: StdRng,
}

/// Picks quotes for a category without repeating within a round
#[derive(Debug)]
pub struct QuoteSelector {
    corpus: QuoteCorpus,
    synonyms: SynonymTable,
    no_match: NoMatchPolicy,
    load_diagnostic: Option<String>,
    state: Mutex<SelectionState>,
}

impl QuoteSelector {
    /// Load the corpus from `source` and build a selector.
    ///
    /// A failed load leaves the selector usable with an empty corpus; the
    /// failure is logged and kept in [`QuoteSelector::load_diagnostic`].
    pub fn initialize(source: &dyn CorpusSource, config: SelectorConfig) -> Self {
        let origin = source.origin();
        match source.load() {
            Ok(quotes) => {
                let mut valid = Vec::with_capacity(quotes.len());
                for quote in quotes {
                    match quote.validate() {
                        Ok(()) => valid.push(quote),
                        Err(e) => warn!("Skipping quote from {}: {}", origin, e),
                    }
                }
                info!("Initialized with {} quotes from {}", valid.len(), origin);
                Self::from_corpus(QuoteCorpus::new(valid), config)
            }
            Err(e) => {
                warn!("Error initializing quote selector: {}", e);
                let mut selector = Self::from_corpus(QuoteCorpus::empty(), config);
                selector.load_diagnostic = Some(e.to_string());
                selector
            }
        }
    }

    /// Build a selector over an already loaded corpus
    pub fn from_corpus(corpus: QuoteCorpus, config: SelectorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            corpus,
            synonyms: config.synonyms,
            no_match: config.no_match,
            load_diagnostic: None,
            state: Mutex::new(SelectionState {
                usage: UsageTracker::new(),
                rng,
            }),
        }
    }

    /// Select a quote for `category`, or from the whole corpus when `None`.
    ///
    /// Returns `None` when the corpus is empty, or when nothing matches and
    /// the no-match policy is [`NoMatchPolicy::NoneFound`].
    pub fn select_quote(&self, category: Option<&str>) -> Option<Quote> {
        self.select(category).ok()
    }

    /// Like [`QuoteSelector::select_quote`], but says why nothing was found
    pub fn select(&self, category: Option<&str>) -> Result<Quote, DomainError> {
        if self.corpus.is_empty() {
            warn!("No quotes loaded. Check the corpus source.");
            return Err(DomainError::EmptyCorpus);
        }

        let key = CategoryKey::resolve(category);
        let candidates = self.corpus.candidates(&key, &self.synonyms);

        if candidates.is_empty() {
            warn!("No quotes found for category: {}", key);
            return match self.no_match {
                NoMatchPolicy::NoneFound => Err(DomainError::NoMatch(
                    category.unwrap_or(CategoryKey::ALL).to_string(),
                )),
                NoMatchPolicy::WholeCorpus => {
                    let mut state = self.lock_state();
                    self.corpus
                        .quotes()
                        .choose(&mut state.rng)
                        .cloned()
                        .ok_or(DomainError::EmptyCorpus)
                }
            };
        }

        let mut guard = self.lock_state();
        let SelectionState { usage, rng } = &mut *guard;
        let Some(pick) = usage.draw(&key, candidates.len(), rng) else {
            return Err(DomainError::NoMatch(key.to_string()));
        };

        if !pick.tracked {
            warn!("All quotes used for category: {}. Resetting...", key);
        } else if pick.round_reset {
            debug!("Reset used quotes for category: {}", key);
        }

        let quote = candidates[pick.index];
        debug!(
            "Returning quote for category: {}. Used quote count: {} ({})",
            key,
            usage.used_count(&key),
            preview(quote.content(), 40)
        );
        Ok(quote.clone())
    }

    /// Quotes used so far in the current round for `category`
    pub fn used_count(&self, category: Option<&str>) -> usize {
        self.lock_state()
            .usage
            .used_count(&CategoryKey::resolve(category))
    }

    /// Number of quotes `category` draws from (0 when nothing matches)
    pub fn candidate_count(&self, category: Option<&str>) -> usize {
        self.corpus
            .candidates(&CategoryKey::resolve(category), &self.synonyms)
            .len()
    }

    /// Start fresh rounds for every category
    pub fn reset(&self) {
        self.lock_state().usage.reset_all();
    }

    pub fn corpus(&self) -> &QuoteCorpus {
        &self.corpus
    }

    pub fn no_match_policy(&self) -> NoMatchPolicy {
        self.no_match
    }

    /// Why the corpus failed to load, if it did
    pub fn load_diagnostic(&self) -> Option<&str> {
        self.load_diagnostic.as_deref()
    }

    // The state is a plain map and an RNG; a panic mid-draw cannot leave it
    // inconsistent, so a poisoned lock is taken over as-is.
    fn lock_state(&self) -> MutexGuard<'_, SelectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::corpus_source::{CorpusError, InMemoryCorpus};
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::Arc;

    struct FailingCorpus;

    impl CorpusSource for FailingCorpus {
        fn origin(&self) -> String {
            "quotes.json".to_string()
        }

        fn load(&self) -> Result<Vec<Quote>, CorpusError> {
            Err(CorpusError::NotFound(PathBuf::from("quotes.json")))
        }
    }

    fn quotes() -> Vec<Quote> {
        vec![
            Quote::new("L1", "Rumi", ["love"]),
            Quote::new("L2", "Rumi", ["Love", "life"]),
            Quote::new("L3", "Rilke", ["love"]),
            Quote::new("P1", "Thich Nhat Hanh", ["peace"]),
            Quote::new("P2", "Marcus Aurelius", ["peace", "virtue"]),
            Quote::new("I1", "Emerson", ["inspiration"]),
        ]
    }

    fn selector(config: SelectorConfig) -> QuoteSelector {
        QuoteSelector::initialize(&InMemoryCorpus::new(quotes()), config.with_seed(42))
    }

    fn draw_contents(selector: &QuoteSelector, category: Option<&str>, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| selector.select_quote(category).unwrap().content().to_string())
            .collect()
    }

    #[test]
    fn test_two_quote_example() {
        let selector = QuoteSelector::initialize(
            &InMemoryCorpus::new(vec![
                Quote::new("A", "", ["love"]),
                Quote::new("B", "", ["love"]),
            ]),
            SelectorConfig::default(),
        );
        let first = draw_contents(&selector, Some("love"), 2);
        let distinct: HashSet<_> = first.iter().cloned().collect();
        assert_eq!(distinct, HashSet::from(["A".to_string(), "B".to_string()]));

        let third = selector.select_quote(Some("love")).unwrap();
        assert!(third.content() == "A" || third.content() == "B");
    }

    #[test]
    fn test_no_repeat_within_round() {
        let selector = selector(SelectorConfig::default());
        let n = selector.candidate_count(Some("love"));
        assert_eq!(n, 3);
        let drawn = draw_contents(&selector, Some("love"), n);
        let distinct: HashSet<_> = drawn.iter().collect();
        assert_eq!(distinct.len(), n);
    }

    #[test]
    fn test_round_reset_allows_repeat() {
        let selector = selector(SelectorConfig::default());
        draw_contents(&selector, Some("peace"), 2);
        assert_eq!(selector.used_count(Some("peace")), 2);

        let next = selector.select_quote(Some("peace")).unwrap();
        assert!(["P1", "P2"].contains(&next.content()));
        assert_eq!(selector.used_count(Some("peace")), 1);
    }

    #[test]
    fn test_every_round_is_a_permutation() {
        let selector = selector(SelectorConfig::default());
        for _ in 0..5 {
            let round: HashSet<_> = draw_contents(&selector, None, 6).into_iter().collect();
            assert_eq!(round.len(), 6);
        }
    }

    #[test]
    fn test_empty_corpus_returns_nothing() {
        let selector = QuoteSelector::initialize(&InMemoryCorpus::default(), SelectorConfig::default());
        assert!(selector.select_quote(None).is_none());
        assert!(selector.select_quote(Some("love")).is_none());
        assert!(matches!(selector.select(None), Err(DomainError::EmptyCorpus)));
    }

    #[test]
    fn test_failed_load_records_diagnostic() {
        let selector = QuoteSelector::initialize(&FailingCorpus, SelectorConfig::default());
        assert!(selector.corpus().is_empty());
        assert_eq!(selector.load_diagnostic(), Some("Corpus not found: quotes.json"));
        for _ in 0..3 {
            assert!(selector.select_quote(None).is_none());
        }
    }

    #[test]
    fn test_successful_load_has_no_diagnostic() {
        assert!(selector(SelectorConfig::default()).load_diagnostic().is_none());
    }

    #[test]
    fn test_blank_records_are_skipped() {
        let selector = QuoteSelector::initialize(
            &InMemoryCorpus::new(vec![
                Quote::new("   ", "Nobody", ["love"]),
                Quote::new("Kept", "Somebody", ["love"]),
            ]),
            SelectorConfig::default(),
        );
        assert_eq!(selector.corpus().len(), 1);
    }

    #[test]
    fn test_unknown_category_none_found_policy() {
        let selector = selector(SelectorConfig::default());
        for _ in 0..5 {
            assert!(selector.select_quote(Some("zzzznotacategory")).is_none());
        }
        assert!(matches!(
            selector.select(Some("zzzznotacategory")),
            Err(DomainError::NoMatch(c)) if c == "zzzznotacategory"
        ));
    }

    #[test]
    fn test_unknown_category_whole_corpus_policy() {
        let selector = selector(SelectorConfig::default().with_no_match(NoMatchPolicy::WholeCorpus));
        for _ in 0..10 {
            assert!(selector.select_quote(Some("zzzznotacategory")).is_some());
        }
        // Fallback draws are not tracked
        assert_eq!(selector.used_count(Some("zzzznotacategory")), 0);
    }

    #[test]
    fn test_case_insensitive_categories_share_state() {
        let selector = selector(SelectorConfig::default());
        let mut seen = HashSet::new();
        for category in ["Love", "love", "LOVE"] {
            let quote = selector.select_quote(Some(category)).unwrap();
            assert!(seen.insert(quote.content().to_string()));
        }
        assert_eq!(selector.used_count(Some("lOvE")), 3);
    }

    #[test]
    fn test_independent_category_tracks() {
        let selector = selector(SelectorConfig::default());
        selector.select_quote(Some("love"));
        draw_contents(&selector, Some("peace"), 5);
        assert_eq!(selector.used_count(Some("love")), 1);
    }

    #[test]
    fn test_unfiltered_uses_all_key() {
        let selector = selector(SelectorConfig::default());
        selector.select_quote(None);
        selector.select_quote(Some("all"));
        selector.select_quote(Some(""));
        assert_eq!(selector.used_count(None), 3);
    }

    #[test]
    fn test_synonym_expansion() {
        let selector = selector(SelectorConfig::default());
        assert_eq!(
            selector.select_quote(Some("Motivation")).unwrap().content(),
            "I1"
        );

        let literal = selector_without_synonyms();
        assert!(literal.select_quote(Some("motivation")).is_none());
    }

    fn selector_without_synonyms() -> QuoteSelector {
        selector(SelectorConfig::default().without_synonyms())
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let a = selector(SelectorConfig::default());
        let b = selector(SelectorConfig::default());
        assert_eq!(draw_contents(&a, None, 12), draw_contents(&b, None, 12));
    }

    #[test]
    fn test_reset_starts_new_rounds() {
        let selector = selector(SelectorConfig::default());
        draw_contents(&selector, Some("love"), 2);
        selector.reset();
        assert_eq!(selector.used_count(Some("love")), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_selection_keeps_round_distinct() {
        let many: Vec<Quote> = (0..64)
            .map(|i| Quote::new(format!("Q{i}"), "", ["calm"]))
            .collect();
        let selector = Arc::new(QuoteSelector::initialize(
            &InMemoryCorpus::new(many),
            SelectorConfig::default(),
        ));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let selector = Arc::clone(&selector);
            handles.push(tokio::task::spawn_blocking(move || {
                (0..8)
                    .map(|_| selector.select_quote(Some("calm")).unwrap())
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for quote in handle.await.unwrap() {
                assert!(seen.insert(quote.content().to_string()));
            }
        }
        assert_eq!(seen.len(), 64);
    }
}
