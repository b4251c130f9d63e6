//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for quote cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Quote card for the terminal
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quotes_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => quotes_domain::OutputFormat::Text,
            OutputFormat::Json => quotes_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tile-quotes
#[derive(Parser, Debug)]
#[command(name = "tile-quotes")]
#[command(author, version, about = "Inspirational quotes by theme, without repeats")]
#[command(long_about = r#"
tile-quotes draws inspirational quotes for a category, theme or aspect.

Within one run a quote is not repeated for the same category until every
matching quote has been shown.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./tile-quotes.toml       Project-level config
3. ~/.config/tile-quotes/config.toml   Global config

Example:
  tile-quotes love
  tile-quotes --theme Stoicism --aspect Resilience -n 3
  tile-quotes --list
"#)]
pub struct Cli {
    /// Category to draw from (all quotes when omitted)
    pub category: Option<String>,

    /// Theme tile to draw for (e.g. Rumi, Jung, Buddhism, Stoicism)
    #[arg(long, value_name = "THEME", conflicts_with = "category")]
    pub theme: Option<String>,

    /// Aspect tile within the theme (e.g. Love, Shadow)
    #[arg(long, value_name = "ASPECT", requires = "theme")]
    pub aspect: Option<String>,

    /// Number of quotes to draw
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// List themes and their aspects and exit
    #[arg(long)]
    pub list: bool,

    /// JSON corpus file (overrides the configured one)
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Seed for reproducible draws
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Fall back to any quote when nothing matches the category
    #[arg(long)]
    pub any_on_miss: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress config warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_category() {
        let cli = Cli::try_parse_from(["tile-quotes", "love", "-n", "3"]).unwrap();
        assert_eq!(cli.category.as_deref(), Some("love"));
        assert_eq!(cli.count, 3);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_theme_and_aspect() {
        let cli = Cli::try_parse_from([
            "tile-quotes",
            "--theme",
            "Jung",
            "--aspect",
            "Shadow",
            "-o",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.theme.as_deref(), Some("Jung"));
        assert_eq!(cli.aspect.as_deref(), Some("Shadow"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_aspect_requires_theme() {
        assert!(Cli::try_parse_from(["tile-quotes", "--aspect", "Love"]).is_err());
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(Cli::try_parse_from(["tile-quotes", "-n", "0"]).is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["tile-quotes", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
