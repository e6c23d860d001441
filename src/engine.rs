//! Main AI engine wrapping the tree search
//!
//! The engine is what a game loop talks to. It handles the one position
//! the search cannot: on an empty board there are no stones to anchor
//! candidates to, so the first move goes to the center. Everything else
//! is delegated to the time-boxed search.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use gomoku::{AIEngine, Board, Pos, SearchConfig, Stone};
//!
//! let config = SearchConfig::default().with_time_budget(Duration::from_millis(100));
//! let engine = AIEngine::with_config(config);
//!
//! let board = Board::new().with_move(Pos::new(9, 9), Stone::Black);
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::search::{Mcts, SearchConfig};

/// How the engine arrived at its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center played without searching
    Opening,
    /// Regular tree search result
    TreeSearch,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Win rate of the chosen move in the search tree
    pub win_rate: Option<f64>,
    /// Which path produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search iterations completed
    pub iterations: u64,
    /// Nodes in the search tree
    pub nodes: usize,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            win_rate: None,
            search_type: SearchType::Opening,
            time_ms,
            iterations: 0,
            nodes: 0,
        }
    }
}

/// Main AI engine.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Pos, Stone};
///
/// let engine = AIEngine::new();
/// // The empty board is answered without searching
/// assert_eq!(engine.get_move(&Board::new(), Stone::Black), Some(Pos::center()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    mcts: Mcts,
}

impl AIEngine {
    /// Engine with the default 10 second budget per move.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            mcts: Mcts::new(config),
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if the game is already over or the time budget was
    /// too small to evaluate a single candidate.
    #[must_use]
    pub fn get_move(&self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move together with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        if board.is_board_empty() {
            return MoveResult::opening(Pos::center(), start.elapsed().as_millis() as u64);
        }

        let result = self.mcts.search(board, color);
        let stats = result.stats;
        info!(
            ?color,
            best_move = ?result.best_move,
            win_rate = ?stats.best_win_rate,
            iterations = stats.iterations,
            "engine move"
        );

        MoveResult {
            best_move: result.best_move,
            win_rate: stats.best_win_rate,
            search_type: SearchType::TreeSearch,
            time_ms: stats.elapsed.as_millis() as u64,
            iterations: stats.iterations,
            nodes: stats.nodes,
        }
    }

    /// Configured time budget per move.
    #[must_use]
    pub fn time_budget(&self) -> Duration {
        self.mcts.config().time_budget
    }

    /// Replace the time budget, keeping the rest of the configuration.
    pub fn set_time_budget(&mut self, budget: Duration) {
        let config = self.mcts.config().clone().with_time_budget(budget);
        self.mcts = Mcts::new(config);
    }
}
