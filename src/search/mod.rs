//! Search module for the Gomoku AI
//!
//! Contains:
//! - Arena-allocated search tree with upper-confidence selection
//! - Time-boxed search driver with heuristic-guided expansion
//! - Search configuration

pub mod config;
pub mod mcts;
pub mod node;
pub mod tree;

pub use config::SearchConfig;
pub use mcts::{select_move, Mcts, SearchResult, SearchStats};
pub use node::{Node, NodeId};
pub use tree::SearchTree;
