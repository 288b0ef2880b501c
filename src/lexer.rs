use std::fmt;

use tracing::{debug, trace};

use crate::brackets::{Family, Opener, PendingOpeners};
use crate::cursor::Cursor;
use crate::token::{Location, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Closing bracket with no opener of its family pending.
    StrayClosing(Family),
    /// Input ended inside `/* ... */`.
    UnterminatedBlockComment,
    /// Text that cannot start any token.
    UnexpectedToken(String),
    /// Openers still pending when input ended.
    UnclosedOpeners(Vec<Opener>),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrayClosing(family) => write!(f, "stray closing {family}"),
            Self::UnterminatedBlockComment => {
                write!(f, "reached end of file inside block comment opened")
            }
            Self::UnexpectedToken(lexeme) => {
                write!(f, "unrecognized token '{lexeme}'")
            }
            Self::UnclosedOpeners(openers) => {
                for (i, opener) in openers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{opener}")?;
                }
                write!(f, " before end of input")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {location}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: Location,
}

impl LexError {
    const fn new(kind: LexErrorKind, location: Location) -> Self {
        Self { kind, location }
    }
}

/// Tokenize a source string, dropping comments.
///
/// # Errors
///
/// Returns `LexError` on the first stray closing bracket, unterminated
/// block comment, or unrecognized character, or when brackets are still
/// open at end of input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

/// What the first character of a token selects.
enum Class {
    End,
    Identifier,
    Number,
    SlashOrComment,
    Atom(TokenKind),
    Bracket(Family, bool),
    Unexpected,
}

impl Class {
    const fn of(ch: Option<char>) -> Self {
        let Some(ch) = ch else {
            return Self::End;
        };
        if ch.is_ascii_alphabetic() {
            return Self::Identifier;
        }
        if ch.is_ascii_digit() {
            return Self::Number;
        }
        if ch == '/' {
            return Self::SlashOrComment;
        }
        if let Some(kind) = TokenKind::atom(ch) {
            return Self::Atom(kind);
        }
        match Family::of(ch) {
            Some((family, opens)) => Self::Bracket(family, opens),
            None => Self::Unexpected,
        }
    }
}

const fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// One tokenization session over one source buffer.
///
/// Owns the cursor, its location, and the pending bracket openers, so
/// independent sessions share no state.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    pending: PendingOpeners,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            pending: PendingOpeners::new(),
        }
    }

    /// Run the session to completion, dropping comments.
    ///
    /// # Errors
    ///
    /// See [`tokenize`].
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.run(false)
    }

    /// Like [`Lexer::tokenize`], but comment tokens stay in the output.
    ///
    /// # Errors
    ///
    /// See [`tokenize`].
    pub fn tokenize_with_comments(self) -> Result<Vec<Token>, LexError> {
        self.run(true)
    }

    fn run(mut self, keep_comments: bool) -> Result<Vec<Token>, LexError> {
        debug!(keep_comments, "Starting tokenization");
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            trace!(kind = %token.kind, location = %token.location, lexeme = %token.lexeme);
            match token.kind {
                TokenKind::End => break,
                TokenKind::Unexpected => {
                    return Err(LexError::new(
                        LexErrorKind::UnexpectedToken(token.lexeme),
                        token.location,
                    ));
                }
                TokenKind::Comment if !keep_comments => {}
                _ => tokens.push(token),
            }
        }
        self.finish()?;
        debug!(count = tokens.len(), "Tokenization finished");
        Ok(tokens)
    }

    /// Produce the next token.
    ///
    /// Returns an `End` token once input is exhausted, and an `Unexpected`
    /// token for text that cannot start a token; neither is an error here.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on a stray closing bracket or an unterminated
    /// block comment.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.cursor.eat_while(char::is_whitespace);

        match Class::of(self.cursor.peek()) {
            Class::End => Ok(Token::new(TokenKind::End, "", self.cursor.location())),
            Class::Identifier => Ok(self.run_of(TokenKind::Identifier, is_identifier_char)),
            Class::Number => Ok(self.run_of(TokenKind::Number, |c| c.is_ascii_digit())),
            Class::SlashOrComment => self.slash_or_comment(),
            Class::Atom(kind) => Ok(self.atom(kind)),
            Class::Bracket(family, opens) => self.bracket(family, opens),
            Class::Unexpected => Ok(self.atom(TokenKind::Unexpected)),
        }
    }

    /// Check that every opened bracket was closed.
    ///
    /// # Errors
    ///
    /// Returns `LexError` listing every pending opener, located where
    /// input ended.
    pub fn finish(&self) -> Result<(), LexError> {
        if self.pending.is_balanced() {
            return Ok(());
        }
        Err(LexError::new(
            LexErrorKind::UnclosedOpeners(self.pending.unclosed()),
            self.cursor.location(),
        ))
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        self.cursor.location()
    }

    fn atom(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.pos();
        let location = self.cursor.location();
        self.cursor.get();
        Token::new(kind, self.cursor.slice_from(start), location)
    }

    /// First character, then as many as `pred` accepts.
    fn run_of(&mut self, kind: TokenKind, pred: impl FnMut(char) -> bool) -> Token {
        let start = self.cursor.pos();
        let location = self.cursor.location();
        self.cursor.get();
        self.cursor.eat_while(pred);
        Token::new(kind, self.cursor.slice_from(start), location)
    }

    fn bracket(&mut self, family: Family, opens: bool) -> Result<Token, LexError> {
        if opens {
            let token = self.atom(family.open_kind());
            self.pending.open(family, token.location);
            return Ok(token);
        }

        let token = self.atom(family.close_kind());
        match self.pending.close(family) {
            Some(opener) => {
                trace!(%family, opened = %opener.location, closed = %token.location, "Bracket closed");
                Ok(token)
            }
            None => Err(LexError::new(
                LexErrorKind::StrayClosing(family),
                token.location,
            )),
        }
    }

    fn slash_or_comment(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        let location = self.cursor.location();
        self.cursor.get();

        match self.cursor.peek() {
            Some('/') => {
                self.cursor.get();
                Ok(self.line_comment(start, location))
            }
            Some('*') => {
                self.cursor.get();
                self.block_comment(location)
            }
            _ => Ok(Token::new(
                TokenKind::Slash,
                self.cursor.slice_from(start),
                location,
            )),
        }
    }

    /// Body of a `//` comment, up to and including the newline.
    ///
    /// Input ending before the newline turns the whole comment into an
    /// `Unexpected` token.
    fn line_comment(&mut self, start: usize, location: Location) -> Token {
        let body = self.cursor.pos();
        self.cursor.eat_while(|c| c != '\n');
        let text = self.cursor.slice_from(body);

        if self.cursor.get().is_none() {
            return Token::new(
                TokenKind::Unexpected,
                self.cursor.slice_from(start),
                location,
            );
        }

        let text = text.strip_suffix('\r').unwrap_or(text);
        Token::new(TokenKind::Comment, text, location)
    }

    fn block_comment(&mut self, location: Location) -> Result<Token, LexError> {
        let body = self.cursor.pos();
        loop {
            match (self.cursor.peek(), self.cursor.peek_second()) {
                (None, _) => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedBlockComment,
                        location,
                    ));
                }
                (Some('*'), Some('/')) => break,
                _ => {
                    self.cursor.get();
                }
            }
        }

        let text = self.cursor.slice_from(body);
        self.cursor.get();
        self.cursor.get();
        Ok(Token::new(TokenKind::Comment, text, location))
    }
}
