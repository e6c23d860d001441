//! Placement heuristic used to order search expansion
//!
//! Scores a single hypothetical stone rather than a whole position: for
//! each of the four axes through the placed stone it measures the run of
//! the mover's stones and rewards runs of three or more that still have
//! an empty cell to grow into.
//!
//! The heuristic is coarse. It does not tell an open three
//! from a blocked one and does not look for double threats. Calling it
//! with the opponent's color on the same cell turns it into a threat
//! detector.

use crate::board::{Board, Pos, Stone};
use crate::rules::win::DIRECTIONS;

use super::patterns::PatternScore;

/// Score a placement of `player` at `pos` on a board that already holds
/// that stone.
///
/// Returns 0 when nothing noteworthy is formed. Each axis contributes
/// `PatternScore::RUN_BONUS` at most once, so the maximum is four bonuses.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, player: Stone) -> u64 {
    debug_assert_eq!(board.get(pos), player, "placement must already be on the board");

    DIRECTIONS
        .iter()
        .filter(|&&(dr, dc)| {
            run_through(board, pos, dr, dc, player) >= PatternScore::MIN_SCORED_RUN
                && has_extension(board, pos, dr, dc)
        })
        .map(|_| PatternScore::RUN_BONUS)
        .sum()
}

/// Place `player` at the empty cell `pos` and score the placement
#[must_use]
pub fn score_move(board: &Board, pos: Pos, player: Stone) -> u64 {
    evaluate_position(&board.with_move(pos, player), pos, player)
}

/// Consecutive `player` stones through `pos`, looking at most
/// `EXTENSION_REACH` cells each way.
fn run_through(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> usize {
    let mut run = 1;
    for sign in [1, -1] {
        for step in 1..=PatternScore::EXTENSION_REACH {
            match pos.offset(dr * sign, dc * sign, step) {
                Some(next) if board.get(next) == player => run += 1,
                _ => break,
            }
        }
    }
    run
}

/// Whether any empty cell lies within `EXTENSION_REACH` of `pos` along
/// the axis, on either side.
fn has_extension(board: &Board, pos: Pos, dr: i32, dc: i32) -> bool {
    [1, -1].iter().any(|&sign| {
        (1..=PatternScore::EXTENSION_REACH).any(|step| {
            pos.offset(dr * sign, dc * sign, step)
                .is_some_and(|next| board.is_empty(next))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(player: Stone, row: u8, cols: std::ops::Range<u8>) -> Board {
        let mut board = Board::new();
        for col in cols {
            board.place_stone(Pos::new(row, col), player);
        }
        board
    }

    #[test]
    fn test_isolated_stone_scores_zero() {
        let board = Board::new();
        assert_eq!(score_move(&board, Pos::center(), Stone::Black), 0);
    }

    #[test]
    fn test_pair_scores_zero() {
        let board = row_of(Stone::Black, 9, 9..10);
        assert_eq!(score_move(&board, Pos::new(9, 10), Stone::Black), 0);
    }

    #[test]
    fn test_three_with_room_scores_bonus() {
        let board = row_of(Stone::Black, 9, 7..9);
        assert_eq!(
            score_move(&board, Pos::new(9, 9), Stone::Black),
            PatternScore::RUN_BONUS
        );
    }

    #[test]
    fn test_middle_placement_joins_both_sides() {
        // W W _ W W, filling the gap makes five
        let mut board = row_of(Stone::White, 4, 2..4);
        board.place_stone(Pos::new(4, 5), Stone::White);
        board.place_stone(Pos::new(4, 6), Stone::White);
        assert_eq!(
            score_move(&board, Pos::new(4, 4), Stone::White),
            PatternScore::RUN_BONUS
        );
    }

    #[test]
    fn test_one_blocked_side_still_scores() {
        let mut board = row_of(Stone::Black, 9, 7..9);
        board.place_stone(Pos::new(9, 6), Stone::White);
        // the white stone only blocks one side, the run of 3 still counts
        assert_eq!(
            score_move(&board, Pos::new(9, 9), Stone::Black),
            PatternScore::RUN_BONUS
        );
        // white playing the same cell sees no run of its own
        assert_eq!(score_move(&board, Pos::new(9, 9), Stone::White), 0);
    }

    #[test]
    fn test_axes_accumulate() {
        // horizontal and vertical pairs meeting at (9, 9)
        let mut board = row_of(Stone::Black, 9, 7..9);
        board.place_stone(Pos::new(7, 9), Stone::Black);
        board.place_stone(Pos::new(8, 9), Stone::Black);
        assert_eq!(
            score_move(&board, Pos::new(9, 9), Stone::Black),
            2 * PatternScore::RUN_BONUS
        );
    }

    #[test]
    fn test_no_extension_room_scores_zero() {
        // edge on one side, white wall on the other
        let mut board = row_of(Stone::Black, 0, 0..2);
        for col in 3..7 {
            board.place_stone(Pos::new(0, col), Stone::White);
        }
        assert_eq!(score_move(&board, Pos::new(0, 2), Stone::Black), 0);
    }

    #[test]
    fn test_extension_cell_at_reach_limit_counts() {
        // white wall on cols 3..=5 leaves col 6, four steps out, empty
        let mut board = row_of(Stone::Black, 0, 0..2);
        for col in 3..6 {
            board.place_stone(Pos::new(0, col), Stone::White);
        }
        assert_eq!(
            score_move(&board, Pos::new(0, 2), Stone::Black),
            PatternScore::RUN_BONUS
        );

        // one more white stone pushes the nearest empty cell to step 5
        board.place_stone(Pos::new(0, 6), Stone::White);
        assert!(board.is_empty(Pos::new(0, 7)));
        assert_eq!(score_move(&board, Pos::new(0, 2), Stone::Black), 0);
    }

    #[test]
    fn test_run_stops_at_reach_limit() {
        // eleven in a row, only four each way from the middle are seen
        let board = row_of(Stone::Black, 9, 4..15);
        assert_eq!(run_through(&board, Pos::new(9, 9), 0, 1, Stone::Black), 9);
        assert_eq!(run_through(&board, Pos::new(9, 4), 0, 1, Stone::Black), 5);
        // a gap ends the run even inside the reach
        let mut gapped = row_of(Stone::Black, 3, 0..3);
        gapped.place_stone(Pos::new(3, 4), Stone::Black);
        assert_eq!(run_through(&gapped, Pos::new(3, 0), 0, 1, Stone::Black), 3);
    }

    #[test]
    fn test_defense_scoring_with_opponent_color() {
        // White threatens four; scoring the blocking cell as White flags it
        let board = row_of(Stone::White, 5, 5..8);
        assert!(score_move(&board, Pos::new(5, 8), Stone::White) >= PatternScore::RUN_BONUS);
        assert_eq!(score_move(&board, Pos::new(5, 8), Stone::Black), 0);
    }
}
