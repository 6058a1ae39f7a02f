//! Move module - the closed family of board transformations.
//!
//! A move is a stateless description of a transformation plus its
//! parameters; it holds no board reference, so one move value can be tested
//! against or applied to any number of boards. Every variant reports its
//! applicability, its affected cells and its own inverse.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::error::{Error, Result};
use crate::types::{Cell, Delta, Position};

/// A move touches at most the four cells of a 2x2 square.
type Targets = ArrayVec<Position, 4>;

/// A reversible board transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Swap the token at a position with its right neighbor. Self-inverse.
    FlipRight(Position),
    /// Swap the token at a position with the one underneath it. Self-inverse.
    FlipDown(Position),
    /// Rotate the 2x2 square whose top-left corner is `origin`. With
    /// `clockwise` the tokens cycle A->B->D->C->A, where B is right of A,
    /// C below A and D below B.
    RotateSquare { origin: Position, clockwise: bool },
    /// Shift every token in a column one row, wrapping around. `down` moves
    /// toward higher row indices.
    RotateColumn { column: usize, down: bool },
    /// Shift every token in a row one column, wrapping around. `right` moves
    /// toward higher column indices.
    RotateRow { row: usize, right: bool },
}

impl Move {
    /// Flip the token at `pos` with its right neighbor.
    pub fn flip_right(pos: Position) -> Self {
        Move::FlipRight(pos)
    }

    /// Flip the token at `pos` with the one below it.
    pub fn flip_down(pos: Position) -> Self {
        Move::FlipDown(pos)
    }

    /// Rotate the 2x2 square at `origin` clockwise.
    pub fn rotate_square_clockwise(origin: Position) -> Self {
        Move::RotateSquare {
            origin,
            clockwise: true,
        }
    }

    /// Rotate `column` one row toward the bottom, wrapping around.
    pub fn rotate_column_down(column: usize) -> Self {
        Move::RotateColumn { column, down: true }
    }

    /// Rotate `row` one column toward the right, wrapping around.
    pub fn rotate_row_right(row: usize) -> Self {
        Move::RotateRow { row, right: true }
    }

    /// The fixed cells a flip or square rotation touches. Line rotations
    /// touch a whole column or row and are handled per board.
    fn fixed_targets(&self) -> Option<Targets> {
        let mut targets = Targets::new();
        match *self {
            Move::FlipRight(pos) => {
                targets.push(pos);
                targets.push(pos + Delta::new(1, 0));
            }
            Move::FlipDown(pos) => {
                targets.push(pos);
                targets.push(pos + Delta::new(0, 1));
            }
            Move::RotateSquare { origin, .. } => {
                targets.push(origin);
                targets.push(origin + Delta::new(1, 0));
                targets.push(origin + Delta::new(0, 1));
                targets.push(origin + Delta::new(1, 1));
            }
            Move::RotateColumn { .. } | Move::RotateRow { .. } => return None,
        }
        Some(targets)
    }

    /// Whether every cell this move would touch is on `board`. Never mutates.
    pub fn can_be_applied(&self, board: &Board) -> bool {
        match *self {
            Move::RotateColumn { column, .. } => column < board.width(),
            Move::RotateRow { row, .. } => row < board.height(),
            _ => self
                .fixed_targets()
                .is_some_and(|targets| targets.iter().all(|&p| board.contains_position(p))),
        }
    }

    /// Apply this move to `board` as a sequence of cell writes.
    ///
    /// Fails with `NotApplicable` when a touched cell is off the board; the
    /// board is untouched on failure. Rotations read their whole line before
    /// writing any cell, so the shift works from a consistent snapshot.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        if !self.can_be_applied(board) {
            return Err(Error::NotApplicable);
        }
        match *self {
            Move::FlipRight(pos) => board.swap_tokens(pos, pos + Delta::new(1, 0)),
            Move::FlipDown(pos) => board.swap_tokens(pos, pos + Delta::new(0, 1)),
            Move::RotateSquare { origin, clockwise } => {
                let a = origin;
                let b = origin + Delta::new(1, 0);
                let c = origin + Delta::new(0, 1);
                let d = origin + Delta::new(1, 1);
                let (ta, tb, tc, td) = (
                    board.token_at(a)?,
                    board.token_at(b)?,
                    board.token_at(c)?,
                    board.token_at(d)?,
                );
                // Clockwise: A->B->D->C->A; counter-clockwise inverts it.
                let (na, nb, nc, nd) = if clockwise {
                    (tc, ta, td, tb)
                } else {
                    (tb, td, ta, tc)
                };
                board.set_token_at(a, na)?;
                board.set_token_at(b, nb)?;
                board.set_token_at(c, nc)?;
                board.set_token_at(d, nd)
            }
            Move::RotateColumn { column, down } => {
                let height = board.height();
                let line: Vec<Cell> = (0..height)
                    .map(|y| board.token_at(Position::new(column as i32, y as i32)))
                    .collect::<Result<_>>()?;
                for (y, &cell) in line.iter().enumerate() {
                    let target = if down {
                        (y + 1) % height
                    } else {
                        (y + height - 1) % height
                    };
                    board.set_token_at(Position::new(column as i32, target as i32), cell)?;
                }
                Ok(())
            }
            Move::RotateRow { row, right } => {
                let width = board.width();
                let line: Vec<Cell> = (0..width)
                    .map(|x| board.token_at(Position::new(x as i32, row as i32)))
                    .collect::<Result<_>>()?;
                for (x, &cell) in line.iter().enumerate() {
                    let target = if right {
                        (x + 1) % width
                    } else {
                        (x + width - 1) % width
                    };
                    board.set_token_at(Position::new(target as i32, row as i32), cell)?;
                }
                Ok(())
            }
        }
    }

    /// The move that undoes this one, independent of any board's contents.
    pub fn reverse(&self) -> Move {
        match *self {
            Move::FlipRight(pos) => Move::FlipRight(pos),
            Move::FlipDown(pos) => Move::FlipDown(pos),
            Move::RotateSquare { origin, clockwise } => Move::RotateSquare {
                origin,
                clockwise: !clockwise,
            },
            Move::RotateColumn { column, down } => Move::RotateColumn {
                column,
                down: !down,
            },
            Move::RotateRow { row, right } => Move::RotateRow {
                row,
                right: !right,
            },
        }
    }

    /// Every position this move would touch on `board`.
    ///
    /// Fails with `NotApplicable` when any such position is off the board.
    /// Line rotations affect their whole column or row.
    pub fn affected_positions(&self, board: &Board) -> Result<BTreeSet<Position>> {
        if !self.can_be_applied(board) {
            return Err(Error::NotApplicable);
        }
        match *self {
            Move::RotateColumn { column, .. } => Ok((0..board.height())
                .map(|y| Position::new(column as i32, y as i32))
                .collect()),
            Move::RotateRow { row, .. } => Ok((0..board.width())
                .map(|x| Position::new(x as i32, row as i32))
                .collect()),
            _ => {
                // can_be_applied holds, so fixed_targets exists.
                let targets = self.fixed_targets().ok_or(Error::NotApplicable)?;
                Ok(targets.into_iter().collect())
            }
        }
    }
}
