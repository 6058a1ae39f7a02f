//! Filling strategies - suppliers of replacement tokens.
//!
//! The board only relies on one contract: "given a column, produce the next
//! token". Whether that is a pre-seeded per-column sequence or a random draw
//! is invisible to the core.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::board::Alphabet;
use crate::types::Token;

/// Supplier of replacement tokens for emptied cells.
pub trait FillingStrategy: fmt::Debug {
    /// The next token for `column`, or None when the supply is exhausted.
    fn next_token(&mut self, column: usize) -> Option<Token>;
}

/// A strategy fed from pre-seeded token sequences.
///
/// Draws from a per-column sequence when one was configured for the column,
/// otherwise from a shared default sequence. Used to make chain reactions
/// reproducible in tests.
#[derive(Debug, Clone, Default)]
pub struct DeterministicStrategy {
    default_tokens: VecDeque<Token>,
    columns: BTreeMap<usize, VecDeque<Token>>,
}

impl DeterministicStrategy {
    /// Create a strategy with a shared default sequence.
    pub fn new<I>(default_tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        Self {
            default_tokens: default_tokens.into_iter().collect(),
            columns: BTreeMap::new(),
        }
    }

    /// Dedicate a token sequence to one column, shadowing the default.
    pub fn set_column_tokens<I>(&mut self, column: usize, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        self.columns.insert(column, tokens.into_iter().collect());
    }
}

impl FillingStrategy for DeterministicStrategy {
    fn next_token(&mut self, column: usize) -> Option<Token> {
        match self.columns.get_mut(&column) {
            Some(queue) => queue.pop_front(),
            None => self.default_tokens.pop_front(),
        }
    }
}

/// A strategy drawing uniformly from the board's alphabet.
///
/// Seeded so a session can be replayed; the same seed yields the same
/// refill sequence.
#[derive(Debug)]
pub struct RandomStrategy {
    tokens: Vec<Token>,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a strategy drawing from `alphabet` with the given seed.
    pub fn new(alphabet: &Alphabet, seed: u64) -> Self {
        Self {
            tokens: alphabet.tokens().collect(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FillingStrategy for RandomStrategy {
    fn next_token(&mut self, _column: usize) -> Option<Token> {
        // An alphabet always has at least two tokens.
        let idx = self.rng.gen_range(0..self.tokens.len());
        Some(self.tokens[idx])
    }
}
