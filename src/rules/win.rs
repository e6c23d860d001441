//! Terminal-state detection
//!
//! A game ends when either color has `WIN_LENGTH` or more stones in a row
//! along one of the four axes (overlines count), or when the board fills
//! up without such a run (draw).

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Result of scanning a board for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Stone),
    Draw,
    Ongoing,
}

impl Outcome {
    #[inline]
    pub fn is_ongoing(self) -> bool {
        self == Outcome::Ongoing
    }

    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::Win(stone) => Some(stone),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

/// Length of the contiguous run of `color` through `pos` along `(dr, dc)`,
/// counting `pos` itself.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 1;
    for sign in [1, -1] {
        let mut step = 1;
        while let Some(next) = pos.offset(dr * sign, dc * sign, step) {
            if board.get(next) != color {
                break;
            }
            count += 1;
            step += 1;
        }
    }
    count
}

/// Decide the game state of an arbitrary board.
///
/// Every stone is checked along all four axes and the first winning run
/// found decides the result. No legality assumptions are made about the
/// board, so this is safe on hypothetical search positions.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    for pos in board.occupied().iter_ones() {
        let color = board.get(pos);
        for &(dr, dc) in &DIRECTIONS {
            if run_length(board, pos, dr, dc, color) >= WIN_LENGTH {
                return Outcome::Win(color);
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, color) >= WIN_LENGTH)
}

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Find the first winning segment of `stone`, used to highlight the line.
///
/// The segment starts at the first stone of a run, so for an overline the
/// first `WIN_LENGTH` stones are returned.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    let stones = board.stones(stone)?;

    for start in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            // only start from the beginning of a run
            if let Some(prev) = start.offset(-dr, -dc, 1) {
                if board.get(prev) == stone {
                    continue;
                }
            }

            let mut line = [start; WIN_LENGTH];
            let complete = (1..WIN_LENGTH).all(|i| match start.offset(dr, dc, i as i32) {
                Some(next) if board.get(next) == stone => {
                    line[i] = next;
                    true
                }
                _ => false,
            });
            if complete {
                return Some(line);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    fn relabel(board: &Board) -> Board {
        let cells: Vec<Stone> = board.to_cells().into_iter().map(Stone::opponent).collect();
        Board::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(outcome(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::Black));
        assert!(has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::White);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::Black);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::Black));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::White));
        assert_eq!(
            find_five_positions(&board, Stone::White),
            Some([
                Pos::new(4, 8),
                Pos::new(5, 7),
                Pos::new(6, 6),
                Pos::new(7, 5),
                Pos::new(8, 4),
            ])
        );
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::Black));
    }

    #[test]
    fn test_four_is_ongoing_until_fifth_lands() {
        let mut board = Board::new();
        for i in 0..4 {
            board = board.with_move(Pos::new(9, i + 3), Stone::Black);
        }
        assert_eq!(outcome(&board), Outcome::Ongoing);
        assert!(!has_five_in_row(&board, Stone::Black));

        let board = board.with_move(Pos::new(9, 7), Stone::Black);
        assert_eq!(outcome(&board), Outcome::Win(Stone::Black));
        assert!(has_five_at_pos(&board, Pos::new(9, 7), Stone::Black));
    }

    #[test]
    fn test_gap_does_not_win() {
        let mut board = Board::new();
        for col in [0, 1, 2, 4, 5] {
            board.place_stone(Pos::new(0, col), Stone::Black);
        }
        assert_eq!(outcome(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(14 + i, 14 + i), Stone::White);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::White));
    }

    #[test]
    fn test_white_five_wins_regardless_of_other_cells() {
        let mut board = Board::new();
        // scattered black stones, none forming a run
        for (r, c) in [(0, 0), (2, 7), (11, 3), (15, 15), (18, 1), (6, 12)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        for i in 0..5 {
            board.place_stone(Pos::new(12, 6 + i), Stone::White);
        }
        assert_eq!(outcome(&board), Outcome::Win(Stone::White));
        assert_eq!(outcome(&board).winner(), Some(Stone::White));
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        // Pairs of columns alternate color and every row flips the pattern,
        // so no run longer than two exists in any direction.
        let mut cells = Vec::with_capacity(TOTAL_CELLS);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let stone = if (col / 2 + row) % 2 == 0 {
                    Stone::Black
                } else {
                    Stone::White
                };
                cells.push(stone);
            }
        }
        let board = Board::from_cells(&cells).unwrap();
        assert!(board.is_full());
        assert!(!has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::White));
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_outcome_symmetric_under_relabeling() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(3, 2 + i), Stone::Black);
        }
        board.place_stone(Pos::new(4, 4), Stone::White);
        assert_eq!(outcome(&board), Outcome::Win(Stone::Black));
        assert_eq!(outcome(&relabel(&board)), Outcome::Win(Stone::White));

        let mut ongoing = Board::new();
        ongoing.place_stone(Pos::new(9, 9), Stone::Black);
        ongoing.place_stone(Pos::new(9, 10), Stone::White);
        assert_eq!(outcome(&relabel(&ongoing)), Outcome::Ongoing);
    }

    #[test]
    fn test_outcome_idempotent() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 18), Stone::Black);
        }
        assert_eq!(outcome(&board), outcome(&board));
        let empty = Board::new();
        assert_eq!(outcome(&empty), outcome(&empty));
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert!(find_five_positions(&board, Stone::Black).is_none());
        assert!(find_five_positions(&board, Stone::Empty).is_none());
        assert!(!has_five_at_pos(&board, Pos::center(), Stone::Empty));
    }
}
