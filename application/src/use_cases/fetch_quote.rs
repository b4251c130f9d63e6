//! Fetch Quote use case
//!
//! Turns a tile keyword into what the quote card shows. A miss is not an
//! error here: the card gets a fallback line instead of a quote.

use crate::use_cases::select_quote::QuoteSelector;
use quotes_domain::{DomainError, Quote, resolve_keyword};
use serde::Serialize;
use std::sync::Arc;

/// Text shown before the first quote arrives
pub const LOADING_TEXT: &str = "Loading quote...";

/// What a quote card displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    /// Keyword the quote was requested for (empty for unfiltered draws)
    pub keyword: String,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Whether `content` is a real quote rather than placeholder text
    pub found: bool,
}

impl QuoteView {
    /// Card state before anything was fetched
    pub fn placeholder() -> Self {
        Self {
            keyword: String::new(),
            content: LOADING_TEXT.to_string(),
            author: String::new(),
            categories: Vec::new(),
            found: false,
        }
    }

    fn from_quote(keyword: &str, quote: Quote) -> Self {
        Self {
            keyword: keyword.to_string(),
            content: quote.content().to_string(),
            author: quote.author().to_string(),
            categories: quote.categories().to_vec(),
            found: true,
        }
    }

    fn not_found(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            content: format!("No quotes found for '{}'", keyword),
            author: String::new(),
            categories: Vec::new(),
            found: false,
        }
    }
}

/// Use case for filling a quote card
pub struct FetchQuoteUseCase {
    selector: Arc<QuoteSelector>,
}

impl FetchQuoteUseCase {
    pub fn new(selector: Arc<QuoteSelector>) -> Self {
        Self { selector }
    }

    /// Fetch a quote for `keyword`; `None` draws from the whole corpus
    pub fn fetch(&self, keyword: Option<&str>) -> QuoteView {
        let label = keyword.unwrap_or_default();
        match self.selector.select_quote(keyword) {
            Some(quote) => QuoteView::from_quote(label, quote),
            None => QuoteView::not_found(label),
        }
    }

    /// Fetch a quote for a catalog tile: the aspect if given, else the theme
    pub fn fetch_tile(&self, theme: &str, aspect: Option<&str>) -> Result<QuoteView, DomainError> {
        let keyword = resolve_keyword(theme, aspect)?;
        Ok(self.fetch(Some(keyword)))
    }

    /// Fetch `count` quotes in a row for the same keyword
    pub fn fetch_many(&self, keyword: Option<&str>, count: usize) -> Vec<QuoteView> {
        (0..count).map(|_| self.fetch(keyword)).collect()
    }

    pub fn selector(&self) -> &QuoteSelector {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;
    use crate::ports::corpus_source::InMemoryCorpus;

    fn use_case() -> FetchQuoteUseCase {
        let corpus = InMemoryCorpus::new(vec![
            Quote::new("Let yourself be drawn.", "Rumi", ["love"]),
            Quote::new("Live the questions.", "Rilke", ["life"]),
            Quote::new("Knowing your own darkness.", "Jung", ["shadow"]),
        ]);
        let selector = QuoteSelector::initialize(&corpus, SelectorConfig::default().with_seed(1));
        FetchQuoteUseCase::new(Arc::new(selector))
    }

    #[test]
    fn test_placeholder() {
        let view = QuoteView::placeholder();
        assert_eq!(view.content, "Loading quote...");
        assert!(!view.found);
    }

    #[test]
    fn test_fetch_found() {
        let view = use_case().fetch(Some("Love"));
        assert!(view.found);
        assert_eq!(view.keyword, "Love");
        assert_eq!(view.author, "Rumi");
        assert_eq!(view.categories, vec!["love".to_string()]);
    }

    #[test]
    fn test_fetch_not_found_fallback_text() {
        let view = use_case().fetch(Some("Stoicism"));
        assert!(!view.found);
        assert_eq!(view.content, "No quotes found for 'Stoicism'");
        assert_eq!(view.author, "");
    }

    #[test]
    fn test_fetch_tile_uses_aspect() {
        let view = use_case().fetch_tile("jung", Some("shadow")).unwrap();
        assert_eq!(view.keyword, "Shadow");
        assert_eq!(view.author, "Jung");
    }

    #[test]
    fn test_fetch_tile_unknown_theme() {
        assert!(matches!(
            use_case().fetch_tile("Taoism", None),
            Err(DomainError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_fetch_many_covers_round() {
        let views = use_case().fetch_many(None, 3);
        let mut authors: Vec<_> = views.iter().map(|v| v.author.as_str()).collect();
        authors.sort();
        assert_eq!(authors, vec!["Jung", "Rilke", "Rumi"]);
    }

    #[test]
    fn test_serialize_skips_empty_categories() {
        let json = serde_json::to_value(QuoteView::placeholder()).unwrap();
        assert!(json.get("categories").is_none());
        assert_eq!(json["found"], false);
    }
}
