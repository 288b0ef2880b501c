use std::fmt;

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Position of the first character of a buffer.
    pub const START: Self = Self { line: 1, column: 1 };

    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Step past one character on the current line.
    pub const fn advance_column(&mut self) {
        self.column += 1;
    }

    /// Step past a newline.
    pub const fn advance_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of decimal digits.
    Number,
    /// Letter followed by letters, digits, or `_`.
    Identifier,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftSquare,
    /// `]`
    RightSquare,
    /// `{`
    LeftCurly,
    /// `}`
    RightCurly,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `=`
    Equal,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `#`
    Hash,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `'`
    SingleQuote,
    /// `"`
    DoubleQuote,
    /// `// ...` or `/* ... */`.
    Comment,
    /// `|`
    Pipe,
    /// `&`
    And,
    /// End of input, zero width.
    End,
    /// Character that cannot start any token.
    Unexpected,
}

impl TokenKind {
    /// Fixed name used in diagnostics and token listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::LeftSquare => "LeftSquare",
            Self::RightSquare => "RightSquare",
            Self::LeftCurly => "LeftCurly",
            Self::RightCurly => "RightCurly",
            Self::LessThan => "LessThan",
            Self::GreaterThan => "GreaterThan",
            Self::Equal => "Equal",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Asterisk => "Asterisk",
            Self::Slash => "Slash",
            Self::Hash => "Hash",
            Self::Dot => "Dot",
            Self::Comma => "Comma",
            Self::Colon => "Colon",
            Self::Semicolon => "Semicolon",
            Self::SingleQuote => "SingleQuote",
            Self::DoubleQuote => "DoubleQuote",
            Self::Comment => "Comment",
            Self::Pipe => "Pipe",
            Self::And => "And",
            Self::End => "End",
            Self::Unexpected => "Unexpected",
        }
    }

    /// Kind of a single-character operator or punctuation atom.
    ///
    /// Brackets and `/` are not atoms here: they need extra handling.
    #[must_use]
    pub const fn atom(ch: char) -> Option<Self> {
        let kind = match ch {
            '<' => Self::LessThan,
            '>' => Self::GreaterThan,
            '=' => Self::Equal,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Asterisk,
            '#' => Self::Hash,
            '.' => Self::Dot,
            ',' => Self::Comma,
            ':' => Self::Colon,
            ';' => Self::Semicolon,
            '\'' => Self::SingleQuote,
            '"' => Self::DoubleQuote,
            '|' => Self::Pipe,
            '&' => Self::And,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token with its kind, source text, and starting location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: Location,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    #[must_use]
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
