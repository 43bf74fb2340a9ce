//! Theme constants for the five-in-a-row GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(250, 250, 245);
pub const GRID_LINE: Color32 = Color32::from_rgb(150, 150, 150);

// Symbols
pub const X_MARK: Color32 = Color32::from_rgb(220, 40, 40);
pub const O_MARK: Color32 = Color32::from_rgb(40, 170, 60);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(60, 110, 230);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(240, 190, 30);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAITING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
/// Preferred cell edge in pixels, shrunk when the window is too small
pub const CELL_SIZE: f32 = 24.0;
pub const MIN_CELL_SIZE: f32 = 6.0;
pub const MARK_RATIO: f32 = 0.35;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MARK_WIDTH: f32 = 2.0;
