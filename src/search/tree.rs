//! Search tree with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! Children are owned through the arena; parent links are plain indices,
//! so walking back to the root needs no reference counting.

use crate::board::{Board, Pos, Stone};
use crate::rules::Outcome;

use super::node::{Node, NodeId};

/// Search tree with arena-based node storage.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Create a tree whose root is `board` with `player` to move.
    pub fn new(board: Board, player: Stone) -> Self {
        Self {
            nodes: vec![Node::new_root(board, player)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true after construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pick the child with the highest upper confidence bound:
    /// `win_rate + c * sqrt(ln(parent_visits) / child_visits)`.
    ///
    /// # Panics
    ///
    /// Panics if the node has no children or any child is unvisited. The
    /// driver only selects through fully expanded nodes, and every child
    /// is visited in the iteration that creates it.
    pub fn uct_select(&self, id: NodeId, exploration: f64) -> NodeId {
        let node = self.get(id);
        assert!(!node.children.is_empty(), "uct_select on a node without children");

        let log_parent = f64::from(node.visits).ln();

        // max_by keeps the last of equal maxima
        node.children
            .iter()
            .map(|&id| {
                let child = self.get(id);
                assert!(child.visits > 0, "uct_select reached an unvisited child");
                let bound = exploration * (log_parent / f64::from(child.visits)).sqrt();
                (id, child.win_rate() + bound)
            })
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
            .unwrap_or_else(|| unreachable!("children checked non-empty above"))
    }

    /// Expand `parent` with the child reached by `player` playing `mv`,
    /// which must be one of the parent's untried candidates.
    pub fn make_child(&mut self, parent: NodeId, board: Board, mv: Pos, player: Stone) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new_child(board, player, mv, parent));

        let parent_node = self.get_mut(parent);
        let slot = parent_node.untried.iter().position(|&p| p == mv);
        debug_assert!(slot.is_some(), "expanded move {mv} was not an untried candidate");
        if let Some(slot) = slot {
            parent_node.untried.remove(slot);
        }
        parent_node.children.push(id);
        id
    }

    /// Apply `outcome` to `leaf` and each ancestor up to the root.
    pub fn backpropagate(&mut self, leaf: NodeId, outcome: Outcome) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.update(outcome);
            current = node.parent;
        }
    }

    /// The root's child on the path from the root to `id`, if `id` is
    /// below the root.
    pub fn root_child_on_path(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            match self.get(current).parent {
                None => return None,
                Some(parent) if parent == self.root() => return Some(current),
                Some(parent) => current = parent,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> SearchTree {
        let board = Board::new().with_move(Pos::center(), Stone::Black);
        SearchTree::new(board, Stone::White)
    }

    fn expand_first(tree: &mut SearchTree, parent: NodeId) -> NodeId {
        let node = tree.get(parent);
        let mv = node.untried[0];
        let mover = if parent == tree.root() {
            node.player
        } else {
            node.player.opponent()
        };
        let board = node.board.with_move(mv, mover);
        tree.make_child(parent, board, mv, mover)
    }

    #[test]
    fn test_make_child_moves_candidate_to_children() {
        let mut tree = small_tree();
        let root = tree.root();
        let before = tree.get(root).untried.len();

        let child = expand_first(&mut tree, root);
        let mv = tree.get(child).mv.unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(root).untried.len(), before - 1);
        assert!(!tree.get(root).untried.contains(&mv));
        assert_eq!(tree.get(root).children, vec![child]);
        assert_eq!(tree.get(child).parent, Some(root));
        assert_eq!(tree.get(child).player, Stone::White);
        assert_eq!(tree.get(child).board.get(mv), Stone::White);
    }

    #[test]
    fn test_backpropagate_reaches_root() {
        let mut tree = small_tree();
        let root = tree.root();
        let child = expand_first(&mut tree, root);
        let grandchild = expand_first(&mut tree, child);

        tree.backpropagate(grandchild, Outcome::Win(Stone::Black));

        assert_eq!(tree.get(grandchild).visits, 1);
        assert_eq!(tree.get(child).visits, 1);
        assert_eq!(tree.get(root).visits, 1);
        // grandchild was played by black, child by white
        assert_eq!(tree.get(grandchild).wins, 1.0);
        assert_eq!(tree.get(child).wins, 0.0);
        assert_eq!(tree.root_child_on_path(grandchild), Some(child));
        assert_eq!(tree.root_child_on_path(child), Some(child));
        assert_eq!(tree.root_child_on_path(root), None);
    }

    #[test]
    fn test_uct_prefers_higher_win_rate_at_equal_visits() {
        let mut tree = small_tree();
        let root = tree.root();
        let a = expand_first(&mut tree, root);
        let b = expand_first(&mut tree, root);

        tree.backpropagate(a, Outcome::Win(Stone::Black));
        tree.backpropagate(b, Outcome::Win(Stone::White));

        assert_eq!(tree.uct_select(root, 1.0), b);
    }

    #[test]
    fn test_uct_explores_less_visited_child() {
        let mut tree = small_tree();
        let root = tree.root();
        let a = expand_first(&mut tree, root);
        let b = expand_first(&mut tree, root);

        // equal win rates, b visited far less
        for _ in 0..20 {
            tree.backpropagate(a, Outcome::Draw);
        }
        tree.backpropagate(b, Outcome::Draw);

        assert_eq!(tree.uct_select(root, 1.0), b);
    }

    #[test]
    #[should_panic(expected = "without children")]
    fn test_uct_select_without_children_panics() {
        let tree = small_tree();
        tree.uct_select(tree.root(), 1.0);
    }

    #[test]
    #[should_panic(expected = "unvisited child")]
    fn test_uct_select_unvisited_child_panics() {
        let mut tree = small_tree();
        let root = tree.root();
        expand_first(&mut tree, root);
        tree.get_mut(root).visits = 1;
        tree.uct_select(root, 1.0);
    }
}
