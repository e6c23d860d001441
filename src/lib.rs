//! Gomoku AI engine with heuristic-guided tree search
//!
//! A five-in-a-row engine for the standard 19x19 board:
//! - 5 or more stones in a row wins (overlines allowed)
//! - A full board without a five is a draw
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Terminal-state detection and candidate moves
//! - [`eval`]: Placement heuristic
//! - [`search`]: Search tree and the time-boxed search driver
//! - [`engine`]: Engine façade used by the front ends
//! - [`ui`]: GUI and console front ends
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use gomoku::{apply_move, outcome, select_move, Board, Outcome, Pos, Stone};
//!
//! let mut board = Board::new();
//! for col in 5..9 {
//!     board = apply_move(&board, Pos::new(9, col), Stone::Black);
//! }
//! board = apply_move(&board, Pos::new(0, 0), Stone::White);
//!
//! // Black completes its four
//! if let Some(pos) = select_move(&board, Stone::Black, Duration::from_millis(100)) {
//!     board = apply_move(&board, pos, Stone::Black);
//! }
//! assert_eq!(outcome(&board), Outcome::Win(Stone::Black));
//! ```
//!
//! # Search
//!
//! Each search iteration:
//! 1. Descends through fully expanded nodes by upper confidence bound
//! 2. Expands the untried candidate with the best placement score
//! 3. Decides the resulting board
//! 4. Backpropagates the result to the root
//!
//! The loop runs until the time budget is spent. The answer is the root
//! move whose win rate peaked highest during the search.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{apply_move, Board, BoardError, Pos, Stone, BOARD_SIZE, TOTAL_CELLS, WIN_LENGTH};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use eval::{evaluate_position, score_move};
pub use rules::{candidate_moves, outcome, Outcome};
pub use search::{select_move, Mcts, SearchConfig, SearchResult, SearchStats};
