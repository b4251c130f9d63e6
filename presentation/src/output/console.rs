//! Console output formatter for quote cards

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use quotes_application::QuoteView;
use quotes_domain::Theme;

const CARD_WIDTH: usize = 60;

/// Formats quote cards for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a quote card: wrapped text, then the author on its own line
    pub fn format_quote(view: &QuoteView) -> String {
        let mut output = String::new();

        if !view.keyword.is_empty() {
            output.push_str(&format!("{}\n", Self::header(&view.keyword)));
        }

        let body = Self::indent(&Self::wrap(&view.content, CARD_WIDTH - 4), "  ");
        if view.found {
            output.push_str(&format!("\n{}\n", body.bold()));
        } else {
            output.push_str(&format!("\n{}\n", body.dimmed()));
        }

        if !view.author.is_empty() {
            output.push_str(&format!(
                "\n{:>width$}\n",
                format!("- {}", view.author).italic().yellow(),
                width = CARD_WIDTH
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(view: &QuoteView) -> String {
        serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format several cards as a JSON array
    pub fn format_json_many(views: &[QuoteView]) -> String {
        serde_json::to_string_pretty(views).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the theme catalog as a tree
    pub fn format_catalog(themes: &[Theme]) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Themes".cyan().bold()));
        for theme in themes {
            output.push_str(&format!("  {}\n", theme.name.bold()));
            for aspect in theme.aspects {
                output.push_str(&format!("    - {}\n", aspect));
            }
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(CARD_WIDTH);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "-".repeat(CARD_WIDTH).cyan())
    }

    /// Greedy word wrap at `width` characters
    pub fn wrap(text: &str, width: usize) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.join("\n")
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_quote(&self, view: &QuoteView) -> String {
        Self::format_quote(view)
    }

    fn format_catalog(&self, themes: &[Theme]) -> String {
        Self::format_catalog(themes)
    }
}
