//! Evaluation module for candidate placements
//!
//! The search does not evaluate whole positions. Instead each candidate
//! cell is scored by what the mover's stone would build there:
//! - Runs of three or more along an axis
//! - Room left to extend those runs

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_position, score_move};
pub use patterns::PatternScore;
