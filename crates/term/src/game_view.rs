//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const LOCKED_FG: Rgb = Rgb::new(170, 170, 180);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the bordered board frame in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws the board, the falling piece and the score panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                let cell = if v != 0 {
                    Cell::new('█', CellStyle::new(LOCKED_FG, PLAY_BG))
                } else {
                    Cell::new('·', CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim())
                };
                self.fill_board_cell(fb, frame, x as i8, y as i8, cell);
            }
        }

        if let Some(active) = snap.active {
            let style = CellStyle::new(piece_color(active.kind), PLAY_BG).bold();
            for (x, y) in active.cells() {
                self.fill_board_cell(fb, frame, x, y, Cell::new('█', style));
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(text_w) / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
            fb.put_str(x, frame.y + frame.h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let Frame { x, y, w, h } = frame;
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    /// Fill one board cell; coordinates outside the board are skipped.
    fn fill_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, cell: Cell) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + (x as u16) * self.cell_w;
        let py = frame.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, cell.ch, cell.style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = frame.y;
        let x = fb.put_str(panel_x, y, "Score: ", label);
        fb.put_u32(x, y, snap.score, value);
        y += 1;
        let x = fb.put_str(panel_x, y, "High Score: ", label);
        fb.put_u32(x, y, snap.high_score, value);
        y += 2;

        if snap.game_over {
            let x = fb.put_str(panel_x, y, "Game Over! Your score is ", value.bold());
            fb.put_u32(x, y, snap.score, value.bold());
            y += 1;
            fb.put_str(panel_x, y, "r restart  q quit", hint);
        } else {
            let help = ["←/→ move", "↓ drop", "↑ rotate", "r restart  q quit"];
            for (i, line) in help.iter().enumerate() {
                fb.put_str(panel_x, y + i as u16, line, hint);
            }
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_centered_in_viewport() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(26, 24));
        // Frame is 22x22: x offset (26-22)/2 = 2, y offset (24-22)/2 = 1.
        assert_eq!(fb.get(2, 1).unwrap().ch, '┌');
        assert_eq!(fb.get(23, 22).unwrap().ch, '┘');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
