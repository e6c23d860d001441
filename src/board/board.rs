//! Immutable-by-value game board

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Errors raised when building a board from external data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have {expected} cells, got {found}")]
    InvalidBoardSize { expected: usize, found: usize },

    #[error("invalid cell symbol {symbol:?} at index {index}")]
    InvalidCell { index: usize, symbol: char },
}

/// Game board.
///
/// `Board` is a small `Copy` value (two bitboards), so applying a move
/// produces a fresh snapshot instead of mutating shared state. Search
/// nodes each keep their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from a flat row-major cell list
    pub fn from_cells(cells: &[Stone]) -> Result<Self, BoardError> {
        if cells.len() != TOTAL_CELLS {
            return Err(BoardError::InvalidBoardSize {
                expected: TOTAL_CELLS,
                found: cells.len(),
            });
        }
        let mut board = Board::new();
        for (idx, &stone) in cells.iter().enumerate() {
            board.place_stone(Pos::from_index(idx), stone);
        }
        Ok(board)
    }

    /// Flat row-major cell list
    pub fn to_cells(&self) -> Vec<Stone> {
        (0..TOTAL_CELLS).map(|idx| self.get(Pos::from_index(idx))).collect()
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Set the cell at `pos` to `stone`, replacing whatever was there.
    /// `Stone::Empty` clears the cell. Used while setting up positions;
    /// game and search code go through `with_move`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.black.clear(pos);
        self.white.clear(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Return a copy of this board with `stone` played at `pos`
    #[inline]
    #[must_use]
    pub fn with_move(&self, pos: Pos, stone: Stone) -> Board {
        debug_assert!(self.is_empty(pos), "cell {pos} is already occupied");
        let mut next = *self;
        next.place_stone(pos, stone);
        next
    }

    /// Bitboard for a color (None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Total stones on board, equal to the number of moves played
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}

/// Commit `player`'s stone at `pos`, returning the new board
#[inline]
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, player: Stone) -> Board {
    board.with_move(pos, player)
}

impl fmt::Display for Board {
    /// One line per row, `-`/`B`/`W` per cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let stone = self.get(Pos::new(row as u8, col as u8));
                write!(f, "{}", stone.symbol())?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the `Display` format. Whitespace is ignored, so both a
    /// single 361-char line and a 19-line grid are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(index, symbol)| {
                Stone::from_symbol(symbol).ok_or(BoardError::InvalidCell { index, symbol })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_cells(&cells)
    }
}
