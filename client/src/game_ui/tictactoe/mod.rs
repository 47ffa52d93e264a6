use tictactoe_common::engine::tictactoe::{BOARD_SIZE, CELL_COUNT, Position};
use tictactoe_common::{Mark, Score, SessionCommand};

use crate::colors;
use crate::state::GameView;

const MIN_CELL_SIZE: f32 = 60.0;
const MAX_CELL_SIZE: f32 = 140.0;
const GRID_WIDTH: f32 = 3.0;
const MARK_WIDTH: f32 = 6.0;
/// Room kept below the board for the score row and the reset button.
const FOOTER_HEIGHT: f32 = 90.0;

#[derive(Default)]
pub struct TicTacToeGameUi {
    hovered_cell: Option<usize>,
}

impl TicTacToeGameUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one frame and returns the command the user's click produced, if any.
    pub fn render(&mut self, ui: &mut egui::Ui, view: &GameView) -> Option<SessionCommand> {
        ui.vertical_centered(|ui| {
            let mut command = None;

            ui.heading("Tic-Tac-Toe");
            ui.add_space(6.0);
            Self::render_status(ui, view);
            ui.add_space(10.0);

            let cell_size =
                calculate_cell_size(ui.available_width(), ui.available_height() - FOOTER_HEIGHT);
            if let Some(index) = self.render_board(ui, view, cell_size) {
                command = Some(SessionCommand::HumanMove { index });
            }

            ui.add_space(10.0);
            Self::render_score(ui, &view.score);
            ui.add_space(6.0);
            if ui.button("Reset").clicked() {
                command = Some(SessionCommand::Reset);
            }

            command
        })
        .inner
    }

    fn render_status(ui: &mut egui::Ui, view: &GameView) {
        let mut text = egui::RichText::new(view.status.to_string()).size(20.0);
        if let Some(winner) = view.status.status.winner() {
            text = text.color(colors::mark_color(winner)).strong();
        }
        ui.label(text);
    }

    fn render_score(ui: &mut egui::Ui, score: &Score) {
        ui.label(
            egui::RichText::new(format!("X: {}", score.x))
                .color(colors::X_COLOR)
                .size(16.0),
        );
        ui.label(
            egui::RichText::new(format!("O: {}", score.o))
                .color(colors::O_COLOR)
                .size(16.0),
        );
    }

    fn render_board(&mut self, ui: &mut egui::Ui, view: &GameView, cell_size: f32) -> Option<usize> {
        let side = cell_size * BOARD_SIZE as f32;
        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

        self.hovered_cell = if view.accepts_clicks() {
            response
                .hover_pos()
                .and_then(|pos| cell_at(rect.min, cell_size, pos))
                .map(|position| position.index())
                .filter(|&index| view.board.is_cell_empty(index))
        } else {
            None
        };
        let clicked = if response.clicked() {
            self.hovered_cell
        } else {
            None
        };

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, colors::BOARD_BACKGROUND);

        for position in (0..CELL_COUNT).filter_map(Position::from_index) {
            let index = position.index();
            let cell = cell_rect(rect.min, cell_size, position);
            match view.winning_line {
                Some(line) if line.contains(index) => {
                    painter.rect_filled(cell, 0.0, colors::win_highlight(line.mark));
                }
                _ if self.hovered_cell == Some(index) => {
                    painter.rect_filled(cell, 0.0, colors::HOVER_COLOR);
                }
                _ => {}
            }

            match view.board.get(index) {
                Some(Mark::X) => draw_x(painter, cell),
                Some(Mark::O) => draw_o(painter, cell),
                _ => {}
            }
        }

        let grid_stroke = egui::Stroke::new(GRID_WIDTH, colors::GRID_COLOR);
        for i in 1..BOARD_SIZE {
            let offset = cell_size * i as f32;
            painter.line_segment(
                [
                    egui::pos2(rect.min.x + offset, rect.min.y),
                    egui::pos2(rect.min.x + offset, rect.max.y),
                ],
                grid_stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.min.x, rect.min.y + offset),
                    egui::pos2(rect.max.x, rect.min.y + offset),
                ],
                grid_stroke,
            );
        }

        clicked
    }
}

fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
    let fit = available_width.min(available_height) / BOARD_SIZE as f32;
    fit.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

fn cell_rect(origin: egui::Pos2, cell_size: f32, position: Position) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + position.col as f32 * cell_size,
            origin.y + position.row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

/// Maps a pointer position to the cell under it.
fn cell_at(origin: egui::Pos2, cell_size: f32, pos: egui::Pos2) -> Option<Position> {
    let local = pos - origin;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let col = (local.x / cell_size) as usize;
    let row = (local.y / cell_size) as usize;
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some(Position::new(row, col))
}

fn draw_x(painter: &egui::Painter, cell: egui::Rect) {
    let inner = cell.shrink(cell.width() * 0.22);
    let stroke = egui::Stroke::new(MARK_WIDTH, colors::X_COLOR);
    painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
    painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
}

fn draw_o(painter: &egui::Painter, cell: egui::Rect) {
    let radius = cell.width() * 0.3;
    painter.circle_stroke(
        cell.center(),
        radius,
        egui::Stroke::new(MARK_WIDTH, colors::O_COLOR),
    );
}
