//! Front ends for the Gomoku game
//!
//! - A native GUI using egui/eframe
//! - A terminal console game over stdin/stdout
//!
//! Both drive the same `GameState`, which calls into the engine.

mod app;
mod board_view;
mod console;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use console::{render_board, run_console};
pub use game_state::{parse_position, GameMode, GameResult, GameState, PlayError};
