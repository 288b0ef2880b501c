//! CLI tool to tokenize and check Lisa source files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use lisa_lexer::{Lexer, Token, read_source};
use tracing::{info, metadata::LevelFilter};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Subcommand)]
enum Command {
    /// Print every token of each file, one per line.
    Tokens {
        /// Keep comment tokens in the listing.
        #[clap(long)]
        comments: bool,

        /// Source files to tokenize.
        #[clap(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check that each file tokenizes cleanly.
    Check {
        /// Source files to check.
        #[clap(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn lex_file(path: &Path, comments: bool) -> anyhow::Result<Vec<Token>> {
    let source = read_source(path)?;

    let start = Instant::now();
    let lexer = Lexer::new(&source);
    let result = if comments {
        lexer.tokenize_with_comments()
    } else {
        lexer.tokenize()
    };
    info!(
        path = %path.display(),
        "Time taken to lex: {} us",
        start.elapsed().as_micros()
    );

    Ok(result?)
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        let name = token.kind.name();
        let location = token.location.to_string();
        println!("{name:<12} {location:<10} |{}|", token.lexeme);
    }
}

fn main() -> ExitCode {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        );
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("cannot set default tracing subscriber");
    }

    let args = Args::parse();

    let (files, comments, listing) = match args.command {
        Command::Tokens { comments, files } => (files, comments, true),
        Command::Check { files } => (files, false, false),
    };

    let mut had_error = false;

    for path in &files {
        match lex_file(path, comments) {
            Ok(tokens) if listing => print_tokens(&tokens),
            Ok(tokens) => println!("{}: ok ({} tokens)", path.display(), tokens.len()),
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
