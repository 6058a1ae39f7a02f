//! Game module - chain-reaction loop and score accumulation.
//!
//! The game owns one board and one matcher. Accepting a move (or starting a
//! session) enters the resolving loop: match, remove, gravity, refill, and
//! re-match until the board is stable. Score only ever increases.

use std::collections::BTreeSet;

use crate::core::board::Board;
use crate::core::error::{Error, Result};
use crate::core::matcher::Matcher;
use crate::core::moves::Move;
use crate::types::{Position, MATCH_BASE_SCORE, MATCH_EXTRA_SCORE, MIN_MATCH_SIZE};

/// Points for a single match of `size` tokens, before chain multiplication:
/// `MATCH_BASE_SCORE` for the first three tokens, `MATCH_EXTRA_SCORE` per
/// additional one.
pub fn match_points(size: usize) -> u64 {
    debug_assert!(size >= MIN_MATCH_SIZE);
    MATCH_BASE_SCORE + (size - MIN_MATCH_SIZE) as u64 * MATCH_EXTRA_SCORE
}

/// A match-three session: board, matcher and the running score.
#[derive(Debug)]
pub struct Game {
    board: Board,
    matcher: Box<dyn Matcher>,
    score: u64,
}

impl Game {
    /// Wrap a board and matcher into a session. The board is not touched
    /// until [`Game::initialize_and_start`] or [`Game::accept_move`].
    pub fn new(board: Board, matcher: Box<dyn Matcher>) -> Self {
        Self {
            board,
            matcher,
            score: 0,
        }
    }

    /// The board the session is played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cumulative score of the session.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Replace the matcher used by subsequent resolving loops. Has no effect
    /// on loops already completed.
    pub fn set_matcher(&mut self, matcher: Box<dyn Matcher>) {
        self.matcher = matcher;
    }

    /// Start the session: run gravity once, refill, and resolve with the
    /// whole board as the seed set.
    ///
    /// The board must have a filling strategy configured, or this fails
    /// with `NoFillingStrategy`.
    pub fn initialize_and_start(&mut self) -> Result<()> {
        let mut seeds = self.board.move_tokens_to_bottom();
        for x in 0..self.board.width() {
            for y in 0..self.board.height() {
                seeds.insert(Position::new(x as i32, y as i32));
            }
        }
        self.board.fill_with_tokens()?;
        self.resolve(seeds)
    }

    /// Apply a move and resolve the chain reaction it triggers.
    ///
    /// Fails with `NotApplicable` when the move's preconditions do not hold
    /// on this board; the board and score are untouched in that case.
    pub fn accept_move(&mut self, mv: Move) -> Result<()> {
        if !mv.can_be_applied(&self.board) {
            return Err(Error::NotApplicable);
        }
        mv.apply(&mut self.board)?;
        let seeds = mv.affected_positions(&self.board)?;
        self.resolve(seeds)
    }

    /// The resolving loop. Each round: find matches seeded by the changed
    /// cells, drop those below the minimum size, score the survivors with
    /// the chain multiplier, remove them in one batch, run gravity, refill,
    /// and seed the next round with everything that changed.
    fn resolve(&mut self, seeds: BTreeSet<Position>) -> Result<()> {
        let mut gained: u64 = 0;
        let mut chain: u64 = 1;

        let mut matches = self.matcher.match_all(&self.board, &seeds)?;
        matches.retain(|m| m.len() >= MIN_MATCH_SIZE);

        while !matches.is_empty() {
            let mut round_points: u64 = 0;
            let mut removed: BTreeSet<Position> = BTreeSet::new();
            for m in &matches {
                round_points += match_points(m.len());
                removed.extend(m.iter().copied());
            }
            gained += chain * round_points * matches.len() as u64;
            log::debug!(
                "chain {}: {} match(es), {} cells removed, round points {}",
                chain,
                matches.len(),
                removed.len(),
                round_points
            );

            self.board.remove_tokens_at(&removed)?;
            let mut next_seeds = removed;
            next_seeds.extend(self.board.move_tokens_to_bottom());
            self.board.fill_with_tokens()?;

            matches = self.matcher.match_all(&self.board, &next_seeds)?;
            matches.retain(|m| m.len() >= MIN_MATCH_SIZE);
            chain += 1;
        }

        self.score += gained;
        Ok(())
    }
}
