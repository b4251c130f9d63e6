//! JSON corpus adapters
//!
//! Both adapters read the same format: a JSON array of quote records, each
//! with `content`, `author` and `categories` (or `category`).

use quotes_application::{CorpusError, CorpusSource};
use quotes_domain::Quote;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Quote data compiled into the binary
const BUNDLED_QUOTES: &str = include_str!("../../data/quotes.json");

/// Parse a JSON array of quote records
pub fn parse_quotes(json: &str, origin: &str) -> Result<Vec<Quote>, CorpusError> {
    serde_json::from_str(json).map_err(|e| CorpusError::Malformed {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}

/// Corpus read from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileCorpus {
    path: PathBuf,
}

impl JsonFileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for JsonFileCorpus {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Quote>, CorpusError> {
        debug!("Reading corpus from {}", self.path.display());
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CorpusError::NotFound(self.path.clone()),
            _ => CorpusError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;
        parse_quotes(&text, &self.origin())
    }
}

/// Corpus bundled with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCorpus;

impl BundledCorpus {
    pub fn new() -> Self {
        Self
    }
}

impl CorpusSource for BundledCorpus {
    fn origin(&self) -> String {
        "bundled".to_string()
    }

    fn load(&self) -> Result<Vec<Quote>, CorpusError> {
        parse_quotes(BUNDLED_QUOTES, "bundled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotes_application::{QuoteSelector, SelectorConfig};
    use quotes_domain::themes;
    use std::collections::HashSet;

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(
            &path,
            r#"[
                {"content": "A", "author": "X", "categories": ["love"]},
                {"content": "B", "author": "Y", "category": ["love"], "length": 1}
            ]"#,
        )
        .unwrap();

        let quotes = JsonFileCorpus::new(&path).load().unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].author(), "Y");
        assert!(quotes[1].has_category("LOVE"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonFileCorpus::new(dir.path().join("absent.json")).load();
        assert!(matches!(result, Err(CorpusError::NotFound(_))));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, r#"{"content": "not an array"}"#).unwrap();

        let result = JsonFileCorpus::new(&path).load();
        match result {
            Err(CorpusError::Malformed { origin, .. }) => {
                assert!(origin.ends_with("quotes.json"));
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file_degrades_selector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, "[{\"author\": \"no content\"}]").unwrap();

        let selector =
            QuoteSelector::initialize(&JsonFileCorpus::new(&path), SelectorConfig::default());
        assert!(selector.select_quote(Some("love")).is_none());
        assert!(selector.load_diagnostic().unwrap().starts_with("Malformed corpus"));
    }

    #[test]
    fn test_bundled_corpus_parses() {
        let quotes = BundledCorpus.load().unwrap();
        assert!(!quotes.is_empty());
        let contents: HashSet<_> = quotes.iter().map(Quote::content).collect();
        assert_eq!(contents.len(), quotes.len(), "bundled quotes must be unique");
    }

    #[test]
    fn test_bundled_corpus_covers_every_tile() {
        let selector =
            QuoteSelector::initialize(&BundledCorpus, SelectorConfig::default().with_seed(5));
        for theme in themes() {
            assert!(selector.candidate_count(Some(theme.name)) > 0, "{}", theme.name);
            for aspect in theme.aspects {
                assert!(selector.candidate_count(Some(*aspect)) > 0, "{}", aspect);
            }
        }
    }
}
