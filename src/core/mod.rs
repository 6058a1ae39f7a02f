//! Core module - the match-three rules with no I/O dependencies.
//!
//! This module contains the board, the matcher, the move family and the
//! chain-reaction game loop. It has zero dependencies on UI or I/O.

pub mod board;
pub mod error;
pub mod fill;
pub mod game;
pub mod matcher;
pub mod moves;

// Re-export commonly used types
pub use board::{Alphabet, Board};
pub use error::{Error, Result};
pub use fill::{DeterministicStrategy, FillingStrategy, RandomStrategy};
pub use game::Game;
pub use matcher::{Matcher, Matches, MaximumDeltaMatcher, MultiMatcher};
pub use moves::Move;
