//! Crate error type.
//!
//! All failures are local and synchronous; nothing is retried internally.
//! Callers that want a non-failing query use the corresponding predicate
//! (`Board::contains_position`, `Move::can_be_applied`) instead.

use thiserror::Error;

use crate::types::Position;

/// Every way a board, matcher, move or game operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("position {0} is not on the board")]
    OutOfBounds(Position),

    #[error("token '{0}' is not in the board's alphabet")]
    UnknownToken(char),

    #[error("no filling strategy configured")]
    NoFillingStrategy,

    #[error("filling strategy ran out of tokens for column {column}")]
    FillExhausted { column: usize },

    #[error("move cannot be applied to this board")]
    NotApplicable,

    #[error("unrecognized character '{0}' in token string")]
    Parse(char),

    #[error("bad board dimensions: {0}")]
    Dimension(String),

    #[error("an alphabet needs at least two distinct tokens")]
    AlphabetTooSmall,

    #[error("matcher deltas must be a non-empty set without the zero delta")]
    InvalidDeltas,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
