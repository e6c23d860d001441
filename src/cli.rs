use clap::{Parser, ValueEnum};

use gomoku::Stone;

/// Play Gomoku against a time-boxed tree search
#[derive(Parser)]
pub struct Args {
    /// Color the human plays
    #[clap(long, value_enum, default_value_t = Color::Black)]
    pub human: Color,
    /// Seconds the AI may think per move
    #[clap(short, long, default_value_t = 10.0)]
    pub time_budget: f64,
    /// Play in the terminal instead of opening a window
    #[clap(short, long)]
    pub console: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    Black,
    White,
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}
