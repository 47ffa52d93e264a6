use egui::Color32;
use tictactoe_common::Mark;

pub const X_COLOR: Color32 = Color32::from_rgb(220, 60, 60);
pub const O_COLOR: Color32 = Color32::from_rgb(60, 90, 220);
pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(245, 245, 240);
pub const GRID_COLOR: Color32 = Color32::from_rgb(60, 60, 60);
pub const HOVER_COLOR: Color32 = Color32::from_rgb(225, 225, 215);

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => X_COLOR,
        Mark::O => O_COLOR,
        Mark::Empty => GRID_COLOR,
    }
}

/// Translucent tint for the cells of a completed line, keyed by the winner.
pub fn win_highlight(mark: Mark) -> Color32 {
    match mark {
        Mark::X => Color32::from_rgba_unmultiplied(220, 60, 60, 70),
        Mark::O => Color32::from_rgba_unmultiplied(60, 90, 220, 70),
        Mark::Empty => Color32::TRANSPARENT,
    }
}
