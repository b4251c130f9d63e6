//! Selection configuration from TOML (`[selection]` section)

use quotes_application::SelectorConfig;
use quotes_domain::{ConfigIssue, ConfigIssueCode, NoMatchPolicy, SynonymTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw selection configuration from TOML
///
/// # Example
///
/// ```toml
/// [selection]
/// no_match = "none"          # "none" or "whole_corpus"
/// synonyms = true            # expand categories with related terms
/// seed = 42                  # reproducible draws
///
/// [selection.extra_synonyms]
/// grief = ["loss", "mourning"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionConfig {
    /// What to do when a category matches nothing
    pub no_match: String,
    /// Enable the built-in synonym table
    pub synonyms: bool,
    /// Fixed RNG seed
    pub seed: Option<u64>,
    /// Additional synonym entries, merged into the table
    pub extra_synonyms: BTreeMap<String, Vec<String>>,
}

impl Default for FileSelectionConfig {
    fn default() -> Self {
        Self {
            no_match: "none".to_string(),
            synonyms: true,
            seed: None,
            extra_synonyms: BTreeMap::new(),
        }
    }
}

impl FileSelectionConfig {
    /// Parse no_match string into NoMatchPolicy, returning warnings on failure.
    pub fn parse_no_match(&self) -> (NoMatchPolicy, Vec<ConfigIssue>) {
        match self.no_match.parse::<NoMatchPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "selection.no_match".to_string(),
                        value: self.no_match.clone(),
                        valid_values: vec!["none".to_string(), "whole_corpus".to_string()],
                    },
                    format!(
                        "selection.no_match: unknown value '{}', falling back to 'none'",
                        self.no_match
                    ),
                );
                (NoMatchPolicy::default(), vec![issue])
            }
        }
    }

    /// Build the synonym table: built-in entries (if enabled) plus extras.
    ///
    /// Extra entries apply even when `synonyms = false`.
    pub fn build_synonyms(&self) -> (SynonymTable, Vec<ConfigIssue>) {
        let mut table = if self.synonyms {
            SynonymTable::builtin()
        } else {
            SynonymTable::empty()
        };
        let mut issues = Vec::new();
        for (category, terms) in &self.extra_synonyms {
            if category.trim().is_empty() || terms.iter().any(|t| t.trim().is_empty()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptySynonymTerm {
                        category: category.clone(),
                    },
                    format!(
                        "selection.extra_synonyms: blank entry under '{}' ignored",
                        category
                    ),
                ));
            }
            table.insert(category, terms);
        }
        (table, issues)
    }

    /// Convert to the application's selector configuration
    pub fn to_selector_config(&self) -> (SelectorConfig, Vec<ConfigIssue>) {
        let (no_match, mut issues) = self.parse_no_match();
        let (synonyms, synonym_issues) = self.build_synonyms();
        issues.extend(synonym_issues);

        let mut config = SelectorConfig::default()
            .with_no_match(no_match)
            .with_synonyms(synonyms);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        (config, issues)
    }
}
