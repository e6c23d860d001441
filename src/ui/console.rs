//! Terminal front end
//!
//! Plays a PvE game over stdin/stdout: the human types `row col`, the AI
//! answers within its time budget.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::rules::Outcome;
use crate::{Board, Pos, SearchConfig, Stone, BOARD_SIZE};

use super::game_state::{parse_position, GameMode, GameState};

/// Board with row and column indices, `●` for black and `○` for white
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {:>2}", col));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{:>2}", row));
        for col in 0..BOARD_SIZE {
            let symbol = match board.get(Pos::new(row as u8, col as u8)) {
                Stone::Empty => '.',
                Stone::Black => '●',
                Stone::White => '○',
            };
            out.push_str(&format!("  {}", symbol));
        }
        out.push('\n');
    }
    out
}

fn color_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "Nobody",
    }
}

/// Run a console game until it ends or stdin closes.
pub fn run_console(human_color: Stone, config: SearchConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    let mut state = GameState::new(GameMode::PvE { human_color }, config);
    info!(?human_color, budget = ?state.search_config().time_budget, "console game started");
    write!(stdout, "{}", render_board(&state.board))?;

    while state.game_over.is_none() {
        if state.is_human_turn() {
            write!(stdout, "Enter your move (row col): ")?;
            stdout.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(stdout)?;
                return Ok(());
            };
            let placed = parse_position(&line).and_then(|pos| state.try_place_stone(pos));
            if let Err(err) = placed {
                writeln!(stdout, "{err}")?;
                continue;
            }
        } else {
            writeln!(stdout, "{} (AI) is thinking...", color_name(state.current_turn))?;
            match state.play_ai_move_blocking() {
                Some(pos) => {
                    let time = state.move_timer.ai_thinking_time.unwrap_or_default();
                    writeln!(stdout, "AI plays {pos} after {:.2}s", time.as_secs_f32())?;
                }
                None => {
                    // only happens when the budget is too small for one iteration
                    writeln!(stdout, "AI could not find a move, giving up the game")?;
                    return Ok(());
                }
            }
        }
        write!(stdout, "{}", render_board(&state.board))?;
    }

    match state.game_over.map(|result| result.outcome) {
        Some(Outcome::Win(winner)) => writeln!(stdout, "{} wins", winner.symbol())?,
        Some(_) => writeln!(stdout, "Tie")?,
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_layout() {
        let board = Board::new()
            .with_move(Pos::new(0, 0), Stone::Black)
            .with_move(Pos::new(18, 18), Stone::White);
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert!(lines[0].trim_start().starts_with("0  1  2"));
        assert!(lines[1].starts_with(" 0  ●"));
        assert!(lines[19].starts_with("18  ."));
        assert!(lines[19].ends_with('○'));
    }
}
