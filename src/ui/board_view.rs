//! Board rendering for the five-in-a-row GUI

use crate::{Board, Cell, Pos};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area, excluding the margin
    grid_rect: Rect,
    /// Board side length the cached geometry was computed for
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            grid_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 5]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        self.size = board.size();

        // Shrink cells so the whole board fits
        let fit = (available.x.min(available.y) - 2.0 * BOARD_MARGIN) / self.size as f32;
        self.cell_size = fit.clamp(MIN_CELL_SIZE, CELL_SIZE);
        let side = self.cell_size * self.size as f32 + 2.0 * BOARD_MARGIN;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !accepting_input {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        if board.is_empty_at(hovered) {
            painter.rect_filled(self.cell_rect(hovered).shrink(1.0), CornerRadius::ZERO, hover_valid());
        }
        // Occupied cells still report the click so the rejection reaches the player
        response.clicked().then_some(hovered)
    }

    /// Draw the N x N cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.grid_rect;

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(rect.min.x + offset, rect.min.y), Pos2::new(rect.min.x + offset, rect.max.y)],
                stroke,
            );
            painter.line_segment(
                [Pos2::new(rect.min.x, rect.min.y + offset), Pos2::new(rect.max.x, rect.min.y + offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, cell) in board.stones() {
            self.draw_mark(painter, pos, cell);
        }
    }

    /// X is a red cross, O a green ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let reach = self.cell_size * MARK_RATIO;

        match cell {
            Cell::X => {
                let stroke = Stroke::new(MARK_WIDTH, X_MARK);
                painter.line_segment(
                    [center + Vec2::new(-reach, -reach), center + Vec2::new(reach, reach)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-reach, reach), center + Vec2::new(reach, -reach)],
                    stroke,
                );
            }
            Cell::O => {
                painter.circle_stroke(center, reach, Stroke::new(MARK_WIDTH, O_MARK));
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.rect_stroke(
            self.cell_rect(pos),
            CornerRadius::ZERO,
            Stroke::new(MARK_WIDTH, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        for pos in line {
            painter.rect_stroke(self.cell_rect(*pos), CornerRadius::same(2), stroke, egui::StrokeKind::Inside);
        }
    }

    /// Convert screen coordinates to the board cell under them
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let x = (relative.x / self.cell_size).floor() as i32;
        let y = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(x, y, self.size) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Centre of a board cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.x as f32 * self.cell_size, pos.y as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}
