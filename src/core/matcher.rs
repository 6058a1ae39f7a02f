//! Matcher module - delta flood fill over the board.
//!
//! A match is the maximal region of same-token cells reachable from a seed
//! by stepping along a fixed set of deltas, in both directions. The closure
//! is computed with an iterative worklist so stack use stays bounded on
//! large boards.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::core::board::Board;
use crate::core::error::{Error, Result};
use crate::types::{Delta, Position};

/// A set of matches; each match is a set of positions holding one token.
/// Matches compare by their member sets, so the same region discovered from
/// two different seeds collapses to one entry.
pub type Matches = BTreeSet<BTreeSet<Position>>;

/// Finds maximal same-token regions on a board.
pub trait Matcher: fmt::Debug {
    /// The match seeded at `seed`.
    ///
    /// Fails with `OutOfBounds` when the seed is off the board. An empty
    /// seed cell yields the single empty match; otherwise the result holds
    /// one connected region containing `seed`.
    fn match_at(&self, board: &Board, seed: Position) -> Result<Matches>;

    /// The union of [`Matcher::match_at`] over every seed.
    fn match_all(&self, board: &Board, seeds: &BTreeSet<Position>) -> Result<Matches> {
        let mut all = Matches::new();
        for &seed in seeds {
            all.extend(self.match_at(board, seed)?);
        }
        Ok(all)
    }
}

/// A matcher stepping along a configured set of deltas.
///
/// From every position already in the region it tests both `pos + d` and
/// `pos - d` for each delta `d`, absorbing neighbors that hold the seed's
/// token, until a full pass adds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaximumDeltaMatcher {
    deltas: BTreeSet<Delta>,
}

impl MaximumDeltaMatcher {
    /// Create a matcher for the given deltas.
    ///
    /// Fails with `InvalidDeltas` when the set is empty or contains the
    /// zero delta.
    pub fn new<I>(deltas: I) -> Result<Self>
    where
        I: IntoIterator<Item = Delta>,
    {
        let deltas: BTreeSet<Delta> = deltas.into_iter().collect();
        if deltas.is_empty() || deltas.iter().any(|d| d.is_zero()) {
            return Err(Error::InvalidDeltas);
        }
        Ok(Self { deltas })
    }
}

impl Matcher for MaximumDeltaMatcher {
    fn match_at(&self, board: &Board, seed: Position) -> Result<Matches> {
        let token = match board.token_at(seed)? {
            Some(token) => token,
            None => {
                let mut result = Matches::new();
                result.insert(BTreeSet::new());
                return Ok(result);
            }
        };

        let mut region = BTreeSet::new();
        region.insert(seed);
        let mut worklist = VecDeque::new();
        worklist.push_back(seed);

        while let Some(pos) = worklist.pop_front() {
            for &delta in &self.deltas {
                for neighbor in [pos.plus(delta), pos.plus(-delta)] {
                    if let Ok(Some(t)) = board.token_at(neighbor) {
                        if t == token && region.insert(neighbor) {
                            worklist.push_back(neighbor);
                        }
                    }
                }
            }
        }

        let mut result = Matches::new();
        result.insert(region);
        Ok(result)
    }
}

/// A matcher that unions the results of two sub-matchers, e.g. a
/// horizontal-delta and a vertical-delta matcher combined into one
/// "any straight run" matcher.
#[derive(Debug)]
pub struct MultiMatcher {
    first: Box<dyn Matcher>,
    second: Box<dyn Matcher>,
}

impl MultiMatcher {
    /// Combine two matchers.
    pub fn new(first: Box<dyn Matcher>, second: Box<dyn Matcher>) -> Self {
        Self { first, second }
    }
}

impl Matcher for MultiMatcher {
    fn match_at(&self, board: &Board, seed: Position) -> Result<Matches> {
        let mut matches = self.first.match_at(board, seed)?;
        matches.extend(self.second.match_at(board, seed)?);
        Ok(matches)
    }

    fn match_all(&self, board: &Board, seeds: &BTreeSet<Position>) -> Result<Matches> {
        let mut matches = self.first.match_all(board, seeds)?;
        matches.extend(self.second.match_all(board, seeds)?);
        Ok(matches)
    }
}
