use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, Level};

use jsoneval::config::Config;
use jsoneval::document::printer::Rendered;
use jsoneval::file::loader::load_json;
use jsoneval::path::{strip_quotes, Evaluator};

/// jsoneval - Evaluate path expressions against JSON documents
#[derive(Parser)]
#[command(name = "jsoneval")]
#[command(version)]
#[command(about = "Evaluate a path expression against a JSON document", long_about = None)]
struct Cli {
    /// JSON file to read (use - for stdin; gzip input is decompressed)
    file: PathBuf,

    /// Path expression, e.g. a.b[a.b[1]].c
    expression: String,

    /// Print the result one member per line
    #[arg(short, long)]
    pretty: bool,

    /// Spaces per indentation level in pretty output
    #[arg(long)]
    indent: Option<usize>,

    /// Keep double quotes in the expression instead of stripping them
    #[arg(long)]
    keep_quotes: bool,

    /// Log parsing and evaluation steps to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Read settings from this file instead of ~/.config/jsoneval/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(&self, mut config: Config) -> Config {
        if self.pretty {
            config.pretty = true;
        }
        if let Some(indent) = self.indent {
            config.indent_size = indent;
        }
        if self.keep_quotes {
            config.strip_quotes = false;
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
        config
    }
}

fn init_logging(config: &Config) {
    let level = config.log_level.parse::<Level>().unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let config = cli.apply(config);
    init_logging(&config);

    let root = load_json(&cli.file)?;
    debug!(document = %root, "parsed document");

    let expression = if config.strip_quotes {
        strip_quotes(&cli.expression)
    } else {
        cli.expression.clone()
    };

    let evaluator = Evaluator::new(&root);
    let result = evaluator
        .evaluate(&expression)
        .with_context(|| format!("Failed to evaluate expression \"{}\"", expression))?;

    println!("{}", Rendered::new(&result, config.layout()));

    Ok(())
}
