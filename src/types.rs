//! Core value types shared across the crate.
//!
//! This module contains pure data types with no dependencies on the rest of
//! the crate: coordinates, offsets, tokens and the game constants.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

/// Minimal number of rows and columns a board must have.
pub const MIN_BOARD_SIZE: usize = 2;

/// Minimal number of tokens a match must contain to score.
pub const MIN_MATCH_SIZE: usize = 3;

/// Points awarded for the first `MIN_MATCH_SIZE` tokens of a match.
pub const MATCH_BASE_SCORE: u64 = 3;

/// Points awarded per token beyond `MIN_MATCH_SIZE`.
pub const MATCH_EXTRA_SCORE: u64 = 2;

/// Character denoting an empty cell in the token-string encoding.
pub const EMPTY_CHAR: char = ' ';

/// Character separating rows in the token-string encoding.
pub const ROW_SEPARATOR: char = ';';

/// A cell on the board (None = empty, Some = occupied by a token).
pub type Cell = Option<Token>;

/// A position on (or off) a board.
///
/// Positions carry no board reference; whether a position is actually on a
/// board is decided by the board itself. Ordering is row-major (row first,
/// then column) so position sets have a canonical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position at column `x`, row `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position reached by applying `delta` to this position.
    /// The result may be off every board; consumers check validity.
    pub fn plus(self, delta: Delta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

impl Add<Delta> for Position {
    type Output = Position;

    fn add(self, delta: Delta) -> Position {
        self.plus(delta)
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A signed 2D offset, used both for move geometry and match directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    /// Create an offset of `dx` columns and `dy` rows.
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Whether this is the zero offset. The zero delta is never a valid
    /// matching direction.
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Delta {
        Delta {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.dx, self.dy)
    }
}

/// An atomic symbol drawn from a board's alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token(char);

impl Token {
    /// Wrap a character as a token.
    pub fn new(c: char) -> Self {
        Self(c)
    }

    /// The underlying character.
    pub fn to_char(self) -> char {
        self.0
    }

    /// Turn a string into the token sequence of its characters.
    pub fn sequence(s: &str) -> Vec<Token> {
        s.chars().map(Token).collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
