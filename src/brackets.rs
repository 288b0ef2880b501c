use std::fmt;

use crate::token::{Location, TokenKind};

/// Bracket family. Each family is balanced independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `(` and `)`
    Round,
    /// `[` and `]`
    Square,
    /// `{` and `}`
    Curly,
}

impl Family {
    /// Family and direction of a bracket character, `true` for openers.
    #[must_use]
    pub const fn of(ch: char) -> Option<(Self, bool)> {
        match ch {
            '(' => Some((Self::Round, true)),
            ')' => Some((Self::Round, false)),
            '[' => Some((Self::Square, true)),
            ']' => Some((Self::Square, false)),
            '{' => Some((Self::Curly, true)),
            '}' => Some((Self::Curly, false)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn open_kind(self) -> TokenKind {
        match self {
            Self::Round => TokenKind::LeftParen,
            Self::Square => TokenKind::LeftSquare,
            Self::Curly => TokenKind::LeftCurly,
        }
    }

    #[must_use]
    pub const fn close_kind(self) -> TokenKind {
        match self {
            Self::Round => TokenKind::RightParen,
            Self::Square => TokenKind::RightSquare,
            Self::Curly => TokenKind::RightCurly,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Round => "parenthesis",
            Self::Square => "square bracket",
            Self::Curly => "curly bracket",
        })
    }
}

/// An opening bracket still waiting for its closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opener {
    pub family: Family,
    pub location: Location,
}

impl fmt::Display for Opener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stray opening {} at {}", self.family, self.location)
    }
}

/// One stack of pending openers per bracket family.
#[derive(Debug, Clone, Default)]
pub struct PendingOpeners {
    round: Vec<Opener>,
    square: Vec<Opener>,
    curly: Vec<Opener>,
}

impl PendingOpeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, family: Family, location: Location) {
        self.stack_mut(family).push(Opener { family, location });
    }

    /// Pop the innermost opener of `family`, `None` if the closer is stray.
    pub fn close(&mut self, family: Family) -> Option<Opener> {
        self.stack_mut(family).pop()
    }

    #[must_use]
    pub fn depth(&self, family: Family) -> usize {
        self.stack(family).len()
    }

    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.round.is_empty() && self.square.is_empty() && self.curly.is_empty()
    }

    /// Every unclosed opener: curly first, then round, then square, each
    /// family in source order.
    #[must_use]
    pub fn unclosed(&self) -> Vec<Opener> {
        [Family::Curly, Family::Round, Family::Square]
            .into_iter()
            .flat_map(|family| self.stack(family).iter().copied())
            .collect()
    }

    const fn stack(&self, family: Family) -> &Vec<Opener> {
        match family {
            Family::Round => &self.round,
            Family::Square => &self.square,
            Family::Curly => &self.curly,
        }
    }

    const fn stack_mut(&mut self, family: Family) -> &mut Vec<Opener> {
        match family {
            Family::Round => &mut self.round,
            Family::Square => &mut self.square,
            Family::Curly => &mut self.curly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_independent() {
        let mut pending = PendingOpeners::new();
        pending.open(Family::Round, Location::new(1, 1));
        assert_eq!(pending.close(Family::Square), None);
        assert_eq!(pending.depth(Family::Round), 1);
        assert!(pending.close(Family::Round).is_some());
        assert!(pending.is_balanced());
    }

    #[test]
    fn close_pops_innermost() {
        let mut pending = PendingOpeners::new();
        pending.open(Family::Curly, Location::new(1, 1));
        pending.open(Family::Curly, Location::new(2, 5));
        let popped = pending.close(Family::Curly).expect("opener");
        assert_eq!(popped.location, Location::new(2, 5));
        assert_eq!(pending.depth(Family::Curly), 1);
    }

    #[test]
    fn unclosed_lists_curly_round_square() {
        let mut pending = PendingOpeners::new();
        pending.open(Family::Square, Location::new(1, 1));
        pending.open(Family::Round, Location::new(1, 2));
        pending.open(Family::Curly, Location::new(1, 3));
        pending.open(Family::Round, Location::new(1, 4));
        let families: Vec<_> = pending.unclosed().iter().map(|o| o.family).collect();
        assert_eq!(
            families,
            [Family::Curly, Family::Round, Family::Round, Family::Square]
        );
    }

    #[test]
    fn opener_display() {
        let opener = Opener {
            family: Family::Square,
            location: Location::new(3, 7),
        };
        assert_eq!(opener.to_string(), "stray opening square bracket at 3:7");
    }
}
