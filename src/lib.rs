//! match-three: the rule engine of a match-three puzzle.
//!
//! A rectangular board of tokens, a family of reversible local moves, a
//! delta flood-fill matcher that finds runs of identical tokens, and a
//! chain-reaction loop that removes matches, compacts the board under
//! gravity, refills it and accumulates score until the board is stable.

pub mod core;
pub mod types;
