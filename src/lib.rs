//! Lexer for the Lisa language.
//!
//! Turns source text into classified tokens with 1-based line:column
//! locations, rejecting unbalanced brackets and unterminated comments
//! before any later stage runs.
//!
//! # Quick start
//!
//! ```
//! use lisa_lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("func soma(a, b) // adds\n").unwrap();
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[2].kind, TokenKind::LeftParen);
//! assert_eq!(tokens[2].location.to_string(), "1:10");
//! ```
//!
//! Bracket families are balanced independently, and the first problem
//! stops the scan:
//!
//! ```
//! use lisa_lexer::tokenize;
//!
//! let err = tokenize("(]").unwrap_err();
//! assert_eq!(err.to_string(), "stray closing square bracket at 1:2");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::missing_panics_doc, clippy::module_name_repetitions)]

pub mod brackets;
pub mod cursor;
pub mod lexer;
pub mod source;
pub mod token;

use std::path::Path;

pub use brackets::{Family, Opener, PendingOpeners};
pub use cursor::Cursor;
pub use lexer::{LexError, LexErrorKind, Lexer, tokenize};
pub use source::{SourceError, read_source};
pub use token::{Location, Token, TokenKind};

/// Unified error type covering both reading and lexing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be read.
    #[error("{0}")]
    Source(#[from] SourceError),
    /// The source was read but failed to lex.
    #[error("{0}")]
    Lex(#[from] LexError),
}

/// Read a source file and tokenize it in one step.
///
/// # Errors
///
/// Returns `Error::Source` if the file cannot be read, `Error::Lex` if
/// its contents fail to tokenize.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Token>, Error> {
    let source = read_source(path)?;
    Ok(tokenize(&source)?)
}
