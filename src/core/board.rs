//! Board module - the rectangular token grid.
//!
//! The board is a fixed-size grid where each cell is empty or holds a token
//! from the board's alphabet. Uses a flat array for cache locality; row 0 is
//! the top of the board and gravity pulls tokens toward higher row indices.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).

use std::collections::BTreeSet;
use std::fmt;

use crate::core::error::{Error, Result};
use crate::core::fill::FillingStrategy;
use crate::types::{Cell, Position, Token, EMPTY_CHAR, MIN_BOARD_SIZE, ROW_SEPARATOR};

/// The set of tokens a board accepts. Bound to one board for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    tokens: BTreeSet<Token>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `s`.
    ///
    /// Fails with `AlphabetTooSmall` when fewer than two distinct tokens
    /// remain, and with `Parse` when `s` contains the empty-cell character
    /// or the row separator.
    pub fn parse(s: &str) -> Result<Self> {
        let mut tokens = BTreeSet::new();
        for c in s.chars() {
            if c == EMPTY_CHAR || c == ROW_SEPARATOR {
                return Err(Error::Parse(c));
            }
            tokens.insert(Token::new(c));
        }
        if tokens.len() < 2 {
            return Err(Error::AlphabetTooSmall);
        }
        Ok(Self { tokens })
    }

    /// Whether `token` belongs to this alphabet.
    pub fn contains(&self, token: Token) -> bool {
        self.tokens.contains(&token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; a valid alphabet has at least two tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens in ascending character order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }
}

/// The game board - a `width` x `height` grid with flat row-major storage.
#[derive(Debug)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x).
    cells: Vec<Cell>,
    alphabet: Alphabet,
    filling: Option<Box<dyn FillingStrategy>>,
}

impl Board {
    /// Create a new empty board of the given dimensions.
    pub fn new(alphabet: Alphabet, width: usize, height: usize) -> Result<Self> {
        if width < MIN_BOARD_SIZE || height < MIN_BOARD_SIZE {
            return Err(Error::Dimension(format!(
                "board must be at least {MIN_BOARD_SIZE}x{MIN_BOARD_SIZE}, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
            alphabet,
            filling: None,
        })
    }

    /// Parse a board from its token-string encoding: rows separated by `;`,
    /// one character per cell, `' '` for an empty cell.
    ///
    /// Fails with `Parse` on a character outside the alphabet and with
    /// `Dimension` when rows are ragged or the grid is below 2x2.
    pub fn from_token_string(alphabet: Alphabet, s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.split(ROW_SEPARATOR).collect();
        let height = rows.len();
        let width = rows[0].chars().count();
        if height < MIN_BOARD_SIZE || width < MIN_BOARD_SIZE {
            return Err(Error::Dimension(format!(
                "token string encodes a {width}x{height} board, minimum is {MIN_BOARD_SIZE}x{MIN_BOARD_SIZE}"
            )));
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            if row.chars().count() != width {
                return Err(Error::Dimension(String::from(
                    "all rows must have the same length",
                )));
            }
            for c in row.chars() {
                if c == EMPTY_CHAR {
                    cells.push(None);
                    continue;
                }
                let token = Token::new(c);
                if !alphabet.contains(token) {
                    return Err(Error::Parse(c));
                }
                cells.push(Some(token));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            alphabet,
            filling: None,
        })
    }

    /// Calculate the flat index of a position, or None when off the board.
    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.x >= self.width as i32 || pos.y < 0 || pos.y >= self.height as i32 {
            return None;
        }
        Some(pos.y as usize * self.width + pos.x as usize)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The alphabet this board is bound to.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether `pos` is on the board. Never fails.
    pub fn contains_position(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// The cell content at `pos`, or `OutOfBounds` when `pos` is off the board.
    pub fn token_at(&self, pos: Position) -> Result<Cell> {
        self.index(pos)
            .map(|i| self.cells[i])
            .ok_or(Error::OutOfBounds(pos))
    }

    /// Overwrite the cell at `pos`.
    ///
    /// Fails with `OutOfBounds` for an invalid position and `UnknownToken`
    /// for a token outside the alphabet; the cell is untouched on failure.
    pub fn set_token_at(&mut self, pos: Position, cell: Cell) -> Result<()> {
        let idx = self.index(pos).ok_or(Error::OutOfBounds(pos))?;
        if let Some(token) = cell {
            if !self.alphabet.contains(token) {
                return Err(Error::UnknownToken(token.to_char()));
            }
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// Exchange the contents of two cells atomically: both positions are
    /// validated before either cell is written.
    pub fn swap_tokens(&mut self, a: Position, b: Position) -> Result<()> {
        let ia = self.index(a).ok_or(Error::OutOfBounds(a))?;
        let ib = self.index(b).ok_or(Error::OutOfBounds(b))?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Clear every listed cell to empty.
    ///
    /// The whole batch is validated before any cell is mutated; an invalid
    /// position fails the call with `OutOfBounds` and leaves the board as-is.
    pub fn remove_tokens_at(&mut self, positions: &BTreeSet<Position>) -> Result<()> {
        let mut indices = Vec::with_capacity(positions.len());
        for &pos in positions {
            indices.push(self.index(pos).ok_or(Error::OutOfBounds(pos))?);
        }
        for idx in indices {
            self.cells[idx] = None;
        }
        Ok(())
    }

    /// Gravity: slide every occupied cell toward the bottom of its column
    /// (higher row indices), preserving the relative vertical order, and
    /// leave the vacated cells empty at the top.
    ///
    /// Returns every position whose content changed - both cells that
    /// received a token and cells that became empty. Idempotent: a second
    /// call with no intervening mutation returns the empty set.
    pub fn move_tokens_to_bottom(&mut self) -> BTreeSet<Position> {
        let mut changed = BTreeSet::new();
        for x in 0..self.width {
            let old: Vec<Cell> = (0..self.height)
                .map(|y| self.cells[y * self.width + x])
                .collect();
            let occupied: Vec<Token> = old.iter().filter_map(|c| *c).collect();
            let gap = self.height - occupied.len();
            for y in 0..self.height {
                let new = if y < gap {
                    None
                } else {
                    Some(occupied[y - gap])
                };
                if new != old[y] {
                    self.cells[y * self.width + x] = new;
                    changed.insert(Position::new(x as i32, y as i32));
                }
            }
        }
        if !changed.is_empty() {
            log::trace!("gravity moved {} cells", changed.len());
        }
        changed
    }

    /// Configure the strategy used by [`Board::fill_with_tokens`].
    pub fn set_filling_strategy(&mut self, strategy: Box<dyn FillingStrategy>) {
        self.filling = Some(strategy);
    }

    /// Fill every empty cell with a token from the configured strategy.
    ///
    /// Cells are visited column-major, top to bottom within a column, so a
    /// deterministic strategy produces a reproducible board. Fails with
    /// `NoFillingStrategy` when none is configured, `FillExhausted` when the
    /// strategy runs dry and `UnknownToken` when it produces a token outside
    /// the alphabet.
    pub fn fill_with_tokens(&mut self) -> Result<()> {
        let (width, height) = (self.width, self.height);
        let strategy = self.filling.as_mut().ok_or(Error::NoFillingStrategy)?;
        let mut filled = 0usize;
        for x in 0..width {
            for y in 0..height {
                let idx = y * width + x;
                if self.cells[idx].is_some() {
                    continue;
                }
                let token = strategy
                    .next_token(x)
                    .ok_or(Error::FillExhausted { column: x })?;
                if !self.alphabet.contains(token) {
                    return Err(Error::UnknownToken(token.to_char()));
                }
                self.cells[idx] = Some(token);
                filled += 1;
            }
        }
        if filled > 0 {
            log::trace!("filled {filled} empty cells");
        }
        Ok(())
    }

    /// The canonical token-string encoding of this board, parseable by
    /// [`Board::from_token_string`].
    pub fn to_token_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for y in 0..self.height {
            if y > 0 {
                out.push(ROW_SEPARATOR);
            }
            for x in 0..self.width {
                match self.cells[y * self.width + x] {
                    Some(token) => out.push(token.to_char()),
                    None => out.push(EMPTY_CHAR),
                }
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.to_token_string())
    }
}

impl PartialEq for Board {
    /// Boards compare by dimensions, cells and alphabet; the filling
    /// strategy is not part of a board's value.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cells == other.cells
            && self.alphabet == other.alphabet
    }
}

impl Eq for Board {}
