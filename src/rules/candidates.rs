//! Candidate move generation
//!
//! The search only considers empty cells touching an existing stone
//! (8-neighborhood). This keeps the branching factor small on a 361-cell
//! board.

use crate::board::{Bitboard, Board, Pos};

use super::win::outcome;

/// Neighbor offsets, row-major order
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Empty cells within Chebyshev distance 1 of any stone.
///
/// Returns an empty list when the game is already decided, and also on an
/// empty board (there is nothing to anchor to; callers pick the opening
/// move themselves). Order is deterministic: stones in index order, each
/// stone's neighbors in `NEIGHBORS` order.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if !outcome(board).is_ongoing() {
        return Vec::new();
    }

    let mut seen = Bitboard::new();
    let mut moves = Vec::new();
    for stone in board.occupied().iter_ones() {
        for &(dr, dc) in &NEIGHBORS {
            let Some(next) = stone.offset(dr, dc, 1) else {
                continue;
            };
            if board.is_empty(next) && !seen.get(next) {
                seen.set(next);
                moves.push(next);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::rules::Outcome;

    fn chebyshev(a: Pos, b: Pos) -> u8 {
        a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
    }

    #[test]
    fn test_empty_board_has_no_candidates() {
        assert!(candidate_moves(&Board::new()).is_empty());
    }

    #[test]
    fn test_single_stone_has_eight_neighbors() {
        let board = Board::new().with_move(Pos::center(), Stone::Black);
        let moves = candidate_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|&m| chebyshev(m, Pos::center()) == 1));
    }

    #[test]
    fn test_corner_stone_clipped_to_board() {
        let board = Board::new().with_move(Pos::new(0, 0), Stone::White);
        let mut moves = candidate_moves(&board);
        moves.sort();
        assert_eq!(moves, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn test_candidates_deduplicated_and_empty() {
        let board = Board::new()
            .with_move(Pos::new(9, 9), Stone::Black)
            .with_move(Pos::new(9, 10), Stone::White)
            .with_move(Pos::new(10, 9), Stone::Black);
        let moves = candidate_moves(&board);

        let mut unique = moves.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), moves.len());

        for m in &moves {
            assert!(board.is_empty(*m));
            let anchored = board.occupied().iter_ones().any(|s| chebyshev(*m, s) == 1);
            assert!(anchored, "{m} is not next to any stone");
        }
        assert!(moves.contains(&Pos::new(11, 8)));
        assert!(moves.contains(&Pos::new(8, 11)));
        assert!(!moves.contains(&Pos::new(9, 9)));
    }

    #[test]
    fn test_finished_game_has_no_candidates() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(4, 4 + i), Stone::Black);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::Black));
        assert!(candidate_moves(&board).is_empty());
    }
}
