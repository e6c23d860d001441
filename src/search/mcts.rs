//! Time-boxed tree search.
//!
//! Each iteration runs:
//! 1. Selection: descend through fully expanded nodes by upper confidence bound
//! 2. Expansion: realize the untried candidate the placement heuristic likes best
//! 3. Evaluation: decide the resulting board (win, draw or still open)
//! 4. Backpropagation: update statistics from the new node up to the root
//!
//! There are no random playouts: an unfinished board counts as a loss for
//! both sides, so wins only come from positions the heuristic drives into
//! an actual five.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::eval::score_move;
use crate::rules::outcome;

use super::config::SearchConfig;
use super::tree::SearchTree;

/// Statistics of one search invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStats {
    /// Completed select/expand/evaluate/backpropagate rounds
    pub iterations: u64,
    /// Nodes in the tree when the search stopped, root included
    pub nodes: usize,
    /// Win rate of the chosen root child when it was picked
    pub best_win_rate: Option<f64>,
    /// Wall-clock time spent
    pub elapsed: Duration,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Chosen move, or None if nothing could be expanded
    pub best_move: Option<Pos>,
    pub stats: SearchStats,
}

/// Heuristic-guided tree search bounded by wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct Mcts {
    config: SearchConfig,
}

impl Mcts {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for `player`'s move on `board`.
    ///
    /// Returns no move when the board offers no candidates (empty board,
    /// finished game) or when the budget runs out before the first
    /// expansion.
    pub fn search(&self, board: &Board, player: Stone) -> SearchResult {
        let start = Instant::now();
        let deadline = start + self.config.time_budget;

        let mut tree = SearchTree::new(*board, player);
        let root = tree.root();

        if tree.get(root).untried.is_empty() {
            debug!(?player, "no candidate moves, skipping search");
            return SearchResult {
                best_move: None,
                stats: SearchStats {
                    iterations: 0,
                    nodes: tree.len(),
                    best_win_rate: None,
                    elapsed: start.elapsed(),
                },
            };
        }

        let mut best: Option<(Pos, f64)> = None;
        let mut iterations = 0u64;

        loop {
            if Instant::now() >= deadline {
                break;
            }
            if self.config.max_iterations.is_some_and(|cap| iterations >= cap) {
                break;
            }
            iterations += 1;

            let mut id = root;
            let mut state = *board;
            let mut mover = player;

            // Selection
            while tree.get(id).is_fully_expanded() && !tree.get(id).is_leaf() {
                id = tree.uct_select(id, self.config.exploration);
                if let Some(mv) = tree.get(id).mv {
                    state = state.with_move(mv, mover);
                }
                mover = mover.opponent();
            }
            debug_assert_eq!(state, tree.get(id).board);

            // Expansion
            if let Some(mv) = best_untried(&tree.get(id).untried, &state, mover) {
                state = state.with_move(mv, mover);
                id = tree.make_child(id, state, mv, mover);
                trace!(%mv, ?mover, "expanded");
            }

            // Evaluation and backpropagation
            let result = outcome(&state);
            tree.backpropagate(id, result);

            if let Some(child) = tree.root_child_on_path(id) {
                let node = tree.get(child);
                let rate = node.win_rate();
                if best.map_or(true, |(_, best_rate)| rate > best_rate) {
                    if let Some(mv) = node.mv {
                        best = Some((mv, rate));
                    }
                }
            }
        }

        let stats = SearchStats {
            iterations,
            nodes: tree.len(),
            best_win_rate: best.map(|(_, rate)| rate),
            elapsed: start.elapsed(),
        };
        debug!(
            ?player,
            best_move = ?best.map(|(mv, _)| mv),
            iterations,
            nodes = stats.nodes,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            stats,
        }
    }
}

/// The untried candidate with the highest placement score for `mover`.
/// Ties go to the earliest candidate.
fn best_untried(untried: &[Pos], board: &Board, mover: Stone) -> Option<Pos> {
    let mut best: Option<(Pos, u64)> = None;
    for &pos in untried {
        let score = score_move(board, pos, mover);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Pick `player`'s move on `board` within `budget`.
///
/// Single entry point for a game loop. `None` means no move was found:
/// the board has no candidates (empty or finished) or the budget was too
/// small for a single expansion. The caller decides what to play then,
/// typically the center on an empty board.
#[must_use]
pub fn select_move(board: &Board, player: Stone, budget: Duration) -> Option<Pos> {
    Mcts::new(SearchConfig::default().with_time_budget(budget))
        .search(board, player)
        .best_move
}
