use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, command};
use lamina_syntax_cli::{Error, render::render_ansi};
use lamina_syntax_core::{registry::LAMINA, tokenizer::token::Tokenizer};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a Lamina file and print the spans as JSON
    Tokens(TokensArgs),

    /// Render a Lamina file to stdout with ANSI colors
    Highlight(HighlightArgs),

    /// Print the Lamina language descriptor as JSON
    Describe,
}

#[derive(Parser)]
struct TokensArgs {
    /// Path to the Lamina source file
    file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Parser)]
struct HighlightArgs {
    /// Path to the Lamina source file
    file: PathBuf,
}

fn read_source(path: &Path) -> Result<String, Error> {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if !LAMINA.claims_filename(name)? {
            warn!(
                "{} does not match any declared Lamina filename pattern",
                name
            );
        }
    }
    Ok(fs::read_to_string(path)?)
}

fn output_json<T: serde::Serialize>(data: &T, pretty: bool) -> Result<(), Error> {
    let output = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    }?;

    println!("{}", output);
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Tokens(args) => {
            let source = read_source(&args.file)?;
            let spans = Tokenizer::new().tokenize(&source);
            output_json(&spans, args.pretty)
        }
        Commands::Highlight(args) => {
            let source = read_source(&args.file)?;
            let spans = Tokenizer::new().tokenize(&source);
            print!("{}", render_ansi(&source, &spans));
            Ok(())
        }
        Commands::Describe => output_json(&LAMINA, true),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
