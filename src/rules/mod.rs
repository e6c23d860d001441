//! Game rules for five-in-a-row
//!
//! This module implements:
//! - Terminal-state detection (win, draw, ongoing)
//! - Candidate move generation for the search

pub mod candidates;
pub mod win;

// Re-exports for convenient access
pub use candidates::candidate_moves;
pub use win::{find_five_positions, has_five_at_pos, has_five_in_row, outcome, Outcome};
