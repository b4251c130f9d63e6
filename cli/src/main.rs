//! CLI entrypoint for tile-quotes
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use quotes_application::{CorpusSource, FetchQuoteUseCase, QuoteSelector, QuoteView};
use quotes_domain::{NoMatchPolicy, OutputFormat, resolve_keyword, themes};
use quotes_infrastructure::{BundledCorpus, ConfigLoader, JsonFileCorpus};
use quotes_presentation::{Cli, ConsoleFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    if cli.list {
        print!("{}", ConsoleFormatter::format_catalog(themes()));
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting tile-quotes");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?
    };

    for issue in file_config.validate() {
        warn!("{}", issue.message);
        if !cli.quiet {
            eprintln!("warning: {}", issue.message);
        }
    }

    let (mut selector_config, _) = file_config.selection.to_selector_config();
    if let Some(seed) = cli.seed {
        selector_config = selector_config.with_seed(seed);
    }
    if cli.any_on_miss {
        selector_config = selector_config.with_no_match(NoMatchPolicy::WholeCorpus);
    }

    // === Dependency Injection ===
    let corpus_path = cli.corpus.clone().or(file_config.corpus.resolve_path().0);
    let source: Box<dyn CorpusSource> = match corpus_path {
        Some(path) => Box::new(JsonFileCorpus::new(path)),
        None => Box::new(BundledCorpus::new()),
    };

    let selector = Arc::new(QuoteSelector::initialize(source.as_ref(), selector_config));
    if let Some(diagnostic) = selector.load_diagnostic() {
        eprintln!("warning: {}", diagnostic);
    }

    let use_case = FetchQuoteUseCase::new(selector);

    // Theme/aspect tiles resolve to a keyword through the catalog
    let keyword = match &cli.theme {
        Some(theme) => Some(resolve_keyword(theme, cli.aspect.as_deref())?.to_string()),
        None => cli.category.clone(),
    };

    let views = use_case.fetch_many(keyword.as_deref(), cli.count as usize);

    // === Output ===
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(file_config.output.format)
        .unwrap_or_default();

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    print_views(&views, format);

    if views.iter().any(|v| v.found) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_views(views: &[QuoteView], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for view in views {
                println!("{}", ConsoleFormatter::format_quote(view));
            }
        }
        OutputFormat::Json if views.len() == 1 => {
            println!("{}", ConsoleFormatter::format_json(&views[0]));
        }
        OutputFormat::Json => {
            println!("{}", ConsoleFormatter::format_json_many(views));
        }
    }
}
