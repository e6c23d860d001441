//! Colors and proportions for the Gomoku GUI

use egui::Color32;

use crate::{Pos, BOARD_SIZE};

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Overlay markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Side panel
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status, also used for the search timer
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Proportions, relative to the cell size unless noted
pub const BOARD_MARGIN: f32 = 40.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RATIO: f32 = 0.12;
pub const LAST_MOVE_MARKER_RATIO: f32 = 0.16;

/// Hoshi: the 3-3 points, edge midpoints and center
pub fn star_points() -> impl Iterator<Item = Pos> {
    let lines = [3, BOARD_SIZE / 2, BOARD_SIZE - 4].map(|i| i as u8);
    lines
        .into_iter()
        .flat_map(move |row| lines.into_iter().map(move |col| Pos::new(row, col)))
}
