//! Board rendering for the Tic-Tac-Toe GUI

use crate::board::{Board, Coord, Mark, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: egui::Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 200.0,
            board_rect: egui::Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Coord>,
        winning_line: Option<[Coord; 3]>,
        accept_input: bool,
    ) -> Option<Coord> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter, board_size);

        // Draw placed marks
        self.draw_marks(&painter, board);

        // Draw last move marker
        if let Some(coord) = last_move {
            self.draw_last_move_marker(&painter, coord);
        }

        // Draw winning line strike-through
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(coord) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(coord);
                    self.draw_hover_preview(&painter, coord, is_valid);

                    if response.clicked() && is_valid {
                        clicked = Some(coord);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two inner horizontal and vertical grid lines
    fn draw_grid(&self, painter: &Painter, board_size: f32) {
        let stroke = Stroke::new(board_size * GRID_LINE_WIDTH_RATIO, GRID_LINE);

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, board_size);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(board_size, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let coord = Coord::new(row, col);
                match board.get(coord) {
                    Mark::Human => self.draw_circle(painter, coord, CIRCLE_COLOR),
                    Mark::Computer => self.draw_cross(painter, coord, CROSS_COLOR),
                    Mark::Empty => {}
                }
            }
        }
    }

    /// Draw the human's circle mark
    fn draw_circle(&self, painter: &Painter, coord: Coord, color: egui::Color32) {
        let center = self.cell_center(coord);
        let radius = self.cell_size * CIRCLE_RADIUS_RATIO;
        let stroke = Stroke::new(self.cell_size * CIRCLE_WIDTH_RATIO, color);
        painter.circle_stroke(center, radius, stroke);
    }

    /// Draw the computer's cross mark
    fn draw_cross(&self, painter: &Painter, coord: Coord, color: egui::Color32) {
        let center = self.cell_center(coord);
        let half = self.cell_size * (0.5 - CROSS_PADDING_RATIO);
        let stroke = Stroke::new(self.cell_size * CROSS_WIDTH_RATIO, color);

        painter.line_segment(
            [
                center + Vec2::new(-half, -half),
                center + Vec2::new(half, half),
            ],
            stroke,
        );
        painter.line_segment(
            [
                center + Vec2::new(-half, half),
                center + Vec2::new(half, -half),
            ],
            stroke,
        );
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, coord: Coord) {
        let center = self.cell_center(coord);
        let offset = self.cell_size * 0.42;
        painter.circle_filled(
            center + Vec2::new(offset, -offset),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Draw a strike-through over the winning line
    fn draw_winning_line(&self, painter: &Painter, line: &[Coord; 3]) {
        let stroke = Stroke::new(self.cell_size * WIN_LINE_WIDTH_RATIO, WIN_HIGHLIGHT);

        // Extend slightly past the outer cell centers
        let start = self.cell_center(line[0]);
        let end = self.cell_center(line[2]);
        let dir = (end - start).normalized() * self.cell_size * 0.35;
        painter.line_segment([start - dir, end + dir], stroke);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, coord: Coord, is_valid: bool) {
        if is_valid {
            // Ghost of the human's circle
            let center = self.cell_center(coord);
            let radius = self.cell_size * CIRCLE_RADIUS_RATIO;
            let stroke = Stroke::new(self.cell_size * CIRCLE_WIDTH_RATIO, hover_valid());
            painter.circle_stroke(center, radius, stroke);
        } else {
            let rect = self.cell_rect(coord);
            painter.rect_filled(rect.shrink(self.cell_size * 0.06), CornerRadius::same(4), hover_invalid());
        }
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Coord> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32 {
            Some(Coord::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    fn cell_center(&self, coord: Coord) -> Pos2 {
        let x = self.board_rect.min.x + (coord.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (coord.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, coord: Coord) -> egui::Rect {
        let min = self.board_rect.min
            + Vec2::new(
                coord.col as f32 * self.cell_size,
                coord.row as f32 * self.cell_size,
            );
        egui::Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}
