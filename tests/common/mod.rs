#![allow(dead_code)]

use lisa_lexer::{LexError, Location, TokenKind, tokenize};

pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .expect("tokenize failed")
        .iter()
        .map(|t| t.kind)
        .collect()
}

pub fn lexemes(input: &str) -> Vec<String> {
    tokenize(input)
        .expect("tokenize failed")
        .into_iter()
        .map(|t| t.lexeme)
        .collect()
}

/// Helper: tokenize, expect failure, and check where it was reported.
pub fn assert_fails_at(input: &str, line: usize, column: usize) -> LexError {
    let err = tokenize(input).expect_err("tokenize should fail");
    assert_eq!(
        err.location,
        Location::new(line, column),
        "wrong location for {input:?}: {err}"
    );
    err
}
