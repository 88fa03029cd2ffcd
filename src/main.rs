// Sable: tokenizer and parser driver

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sable::parser::lexer::tokenize;
use sable::parser::parse::parse;
use sable::report::eprint_diagnostics;

#[derive(ClapParser)]
#[command(name = "sable", version, about = "Parse a Sable source file and print its syntax tree")]
struct Args {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Do not print the parsed tree
    #[arg(long)]
    no_tree: bool,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize logging. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "sable=warn",
        1 => "sable=debug",
        _ => "sable=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let filename = args.file.display().to_string();
    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", filename, e);
            return Ok(ExitCode::FAILURE);
        }
    };

    info!(file = %filename, bytes = source.len(), "parsing");

    let (tokens, mut diagnostics) = tokenize(&source);

    if args.tokens {
        for token in &tokens {
            let category = if token.kind.is_keyword() {
                "keyword".to_string()
            } else {
                format!("{:?}", token.kind)
            };
            println!(
                "{:>4}:{:<4} {:<12} {}",
                token.location.line, token.location.column, category, token
            );
        }
    }

    let (program, parse_diagnostics) = parse(tokens);
    diagnostics.extend(parse_diagnostics);

    if !args.no_tree {
        print!("{}", program);
    }

    if diagnostics.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    eprint_diagnostics(&source, &filename, &diagnostics)?;
    eprintln!(
        "{} error(s), {} top-level declaration(s) recovered",
        diagnostics.len(),
        program.len()
    );
    Ok(ExitCode::FAILURE)
}
