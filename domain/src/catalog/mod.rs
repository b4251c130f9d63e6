//! Theme catalog
//!
//! The tile hierarchy the app presents: a handful of top-level themes, each
//! with the aspects shown beneath it. Both theme and aspect names double as
//! quote categories. This is data only; moving between tiles is the host's
//! business.

use crate::core::error::DomainError;
use serde::Serialize;

/// A top-level theme and its aspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub aspects: &'static [&'static str],
}

impl Theme {
    /// Find one of this theme's aspects by name, ignoring case
    pub fn find_aspect(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.aspects
            .iter()
            .copied()
            .find(|a| a.eq_ignore_ascii_case(name))
    }
}

const THEMES: &[Theme] = &[
    Theme {
        name: "Rumi",
        aspects: &["Love", "Life"],
    },
    Theme {
        name: "Jung",
        aspects: &["Self", "Shadow"],
    },
    Theme {
        name: "Buddhism",
        aspects: &["Mindfulness", "Compassion"],
    },
    Theme {
        name: "Stoicism",
        aspects: &["Virtue", "Resilience"],
    },
];

/// All themes in display order
pub fn themes() -> &'static [Theme] {
    THEMES
}

/// Look up a theme by name, ignoring case
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    let name = name.trim();
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Aspects of the named theme, empty if the theme is unknown
pub fn aspects_of(theme: &str) -> &'static [&'static str] {
    find_theme(theme).map(|t| t.aspects).unwrap_or_default()
}

/// Quote keyword for a tile: the aspect when given, otherwise the theme name
pub fn resolve_keyword(theme: &str, aspect: Option<&str>) -> Result<&'static str, DomainError> {
    let found = find_theme(theme).ok_or_else(|| DomainError::UnknownTheme(theme.to_string()))?;
    match aspect {
        None => Ok(found.name),
        Some(aspect) => found
            .find_aspect(aspect)
            .ok_or_else(|| DomainError::UnknownAspect {
                theme: found.name.to_string(),
                aspect: aspect.to_string(),
            }),
    }
}
