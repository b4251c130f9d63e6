//! Output formatter trait

use quotes_application::QuoteView;
use quotes_domain::Theme;

/// Trait for rendering quote cards and the theme catalog
pub trait OutputFormatter {
    /// Format a single quote card
    fn format_quote(&self, view: &QuoteView) -> String;

    /// Format the theme catalog
    fn format_catalog(&self, themes: &[Theme]) -> String;
}
