use crate::token::Location;

/// Forward-only view over a source buffer.
///
/// Owns the location of the scanning session it belongs to; every consumed
/// character moves it, and a consumed newline moves it to the next line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    location: Location,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let pos = if input.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        Self {
            input,
            pos,
            location: Location::START,
        }
    }

    /// Next character without consuming it, `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the next one.
    #[must_use]
    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume one character.
    pub fn get(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.location.advance_line();
        } else {
            self.location.advance_column();
        }
        Some(ch)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut pred) {
            self.get();
        }
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Byte offset of the read position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between byte offset `start` and the read position.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }
}
