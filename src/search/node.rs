//! Search tree node representation.
//!
//! Each node holds the board reached by playing `mv` from its parent.
//! Statistics are kept from the point of view of `player`, the color that
//! played `mv`, so a parent choosing among its children maximizes the
//! chooser's own win rate.

use crate::board::{Board, Pos, Stone};
use crate::rules::{candidate_moves, Outcome};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Board snapshot at this node
    pub board: Board,

    /// Color credited with wins at this node: the player who made `mv`,
    /// or the player to move for the root
    pub player: Stone,

    /// Move that led here from the parent (None for root)
    pub mv: Option<Pos>,

    /// Parent node (None for root). Ownership flows through the arena,
    /// this is only a back link.
    pub parent: Option<NodeId>,

    /// Wins for `player`; draws count half
    pub wins: f64,

    /// Number of times this node has been visited
    pub visits: u32,

    /// Candidates not yet expanded into children
    pub untried: Vec<Pos>,

    /// Children in expansion order
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create the root node for `player` to move on `board`.
    pub fn new_root(board: Board, player: Stone) -> Self {
        Self::new(board, player, None, None)
    }

    /// Create a child reached by `player` playing `mv`.
    pub fn new_child(board: Board, player: Stone, mv: Pos, parent: NodeId) -> Self {
        Self::new(board, player, Some(mv), Some(parent))
    }

    fn new(board: Board, player: Stone, mv: Option<Pos>, parent: Option<NodeId>) -> Self {
        Self {
            untried: candidate_moves(&board),
            board,
            player,
            mv,
            parent,
            wins: 0.0,
            visits: 0,
            children: Vec::new(),
        }
    }

    /// Record one playout result.
    #[inline]
    pub fn update(&mut self, outcome: Outcome) {
        self.visits += 1;
        match outcome {
            Outcome::Win(winner) if winner == self.player => self.wins += 1.0,
            Outcome::Draw => self.wins += 0.5,
            Outcome::Win(_) | Outcome::Ongoing => {}
        }
    }

    /// Observed win rate. Returns 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / f64::from(self.visits)
        }
    }

    /// Fully expanded nodes are descended through during selection.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
