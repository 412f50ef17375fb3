//! Command-line interface for xmlnodes
//!
//! Parses an XML file into its element tree and prints it.
//!
//! Usage:
//!   xmlnodes `<path>` [--format `<format>`] [--config `<file>`]   - Print the element tree
//!   xmlnodes `<path>` --at `<line:char>`                         - Print the elements at a position
//!   xmlnodes `<path>` --diagnostics                              - Also report syntax errors
//!   xmlnodes --list-formats                                      - List the output formats
//!
//! Settings come from the embedded defaults, then `./xmlnodes.toml` if present, then
//! `--config`, then flags. Set `RUST_LOG=xmlnodes=debug` to see what the builder drops.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use xmlnodes::xml::building::build_document;
use xmlnodes::xml::config::{Loader, XmlNodesConfig};
use xmlnodes::xml::formats::{FormatRegistry, JsonFormatter, TreevizFormatter};
use xmlnodes::xml::lexing::lex;
use xmlnodes::xml::parsing::parse_syntax;
use xmlnodes::{ParseError, Position, XmlDocument};

#[derive(Debug, Parser)]
#[command(name = "xmlnodes", version, about = "Print the element tree of an XML file")]
struct Cli {
    /// Path to the XML file
    #[arg(required_unless_present = "list_formats")]
    path: Option<PathBuf>,

    /// Output format: treeviz, json, yaml or tokens
    #[arg(short, long)]
    format: Option<String>,

    /// Configuration file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the elements enclosing a zero-based position, deepest first
    #[arg(long, value_name = "LINE:CHAR", value_parser = parse_position)]
    at: Option<Position>,

    /// Report syntax errors on stderr
    #[arg(long)]
    diagnostics: bool,

    /// Prefix treeviz lines with line numbers
    #[arg(long)]
    line_numbers: bool,

    /// List the available output formats and exit
    #[arg(long)]
    list_formats: bool,
}

fn parse_position(value: &str) -> Result<Position, String> {
    let (line, character) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:CHAR, got '{value}'"))?;
    let line = line
        .parse()
        .map_err(|e| format!("invalid line '{line}': {e}"))?;
    let character = character
        .parse()
        .map_err(|e| format!("invalid character '{character}': {e}"))?;
    Ok(Position::new(line, character))
}

fn load_config(cli: &Cli) -> Result<XmlNodesConfig, Box<dyn Error>> {
    let mut loader = Loader::new().with_optional_file("xmlnodes.toml");
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Some(format) = &cli.format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if cli.line_numbers {
        loader = loader.set_override("treeviz.show_line_numbers", true)?;
    }
    Ok(loader.build()?)
}

fn registry(config: &XmlNodesConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::from(&config.treeviz));
    registry.register(JsonFormatter::from(&config.json));
    registry
}

fn print_formats(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {name}");
        println!("    {description}");
    }
    println!("  tokens");
    println!("    Token stream, one token per line");
}

fn print_tokens(source: &str) {
    for token in lex(source) {
        println!(
            "{}:{}\t{:?}\t{:?}",
            token.line,
            token.column,
            token.kind,
            token.text()
        );
    }
}

fn print_nodes_at(doc: &XmlDocument, position: Position) {
    for node in doc.nodes_at(position) {
        println!("<{}> {}", node.tag_name, node.range);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(&cli)?;
    if cli.list_formats {
        print_formats(&registry(&config));
        return Ok(());
    }

    let path = cli.path.as_ref().ok_or("missing <PATH>")?;
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    let Some(formatter) = config.output.format.formatter_name() else {
        print_tokens(&source);
        return Ok(());
    };

    let tree = parse_syntax(&source).map_err(|errors| ParseError::Syntax {
        message: errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    })?;
    if cli.diagnostics {
        for error in tree.errors() {
            eprintln!("{}:{}", path.display(), error);
        }
    }

    let doc = build_document(&tree)?;
    match cli.at {
        Some(position) => print_nodes_at(&doc, position),
        None => println!("{}", registry(&config).serialize(&doc, formatter)?.trim_end()),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("xmlnodes: {error}");
            ExitCode::FAILURE
        }
    }
}
