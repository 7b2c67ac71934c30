//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors - teal palette
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 170, 156);
pub const GRID_LINE: Color32 = Color32::from_rgb(23, 145, 135);

// Mark colors
pub const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200); // Human
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66); // Computer

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 255);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 50)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 80)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Button colors
pub const BUTTON_COLOR: Color32 = Color32::from_rgb(50, 200, 50);
#[allow(dead_code)]
pub const BUTTON_HOVER_COLOR: Color32 = Color32::from_rgb(70, 220, 70);
pub const END_BUTTON_COLOR: Color32 = Color32::from_rgb(200, 50, 50);
#[allow(dead_code)]
pub const END_BUTTON_HOVER_COLOR: Color32 = Color32::from_rgb(220, 70, 70);
pub const DIFFICULTY_BUTTON_COLOR: Color32 = Color32::from_rgb(80, 80, 200);
pub const DIFFICULTY_BUTTON_ACTIVE: Color32 = Color32::from_rgb(100, 100, 220);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const GAME_OVER_ACCENT: Color32 = Color32::from_rgb(180, 255, 180);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes, relative to the rendered board / cell
pub const GRID_LINE_WIDTH_RATIO: f32 = 0.025;
pub const CIRCLE_RADIUS_RATIO: f32 = 1.0 / 3.0;
pub const CIRCLE_WIDTH_RATIO: f32 = 0.075;
pub const CROSS_WIDTH_RATIO: f32 = 0.125;
pub const CROSS_PADDING_RATIO: f32 = 0.25;
pub const WIN_LINE_WIDTH_RATIO: f32 = 0.06;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
