//! DuelView: maps a `DuelState` into a terminal framebuffer.
//!
//! Pure (no I/O): both boards are drawn side by side with the human on the
//! left, plus a result banner once the match ends. Unit-testable.

use crate::core::SideState;
use crate::duel::DuelState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Side, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Display color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::T => Rgb::new(128, 0, 128),
    }
}

/// Renders the two boards of a match.
pub struct DuelView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Horizontal gap between the two board frames.
    gap: u16,
}

impl Default for DuelView {
    fn default() -> Self {
        // 2x1 cells compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, gap: 4 }
    }
}

impl DuelView {
    pub fn new(cell_w: u16, gap: u16) -> Self {
        Self { cell_w, gap }
    }

    /// Render the current match state into a framebuffer.
    pub fn render(&self, duel: &DuelState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) + 2;
        let total_w = frame_w * 2 + self.gap;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2 + 1;

        self.draw_side(&mut fb, duel.human(), "YOU", start_x, start_y);
        self.draw_side(&mut fb, duel.agent(), "CPU", start_x + frame_w + self.gap, start_y);

        if duel.over() {
            let (text, color) = match duel.winner() {
                Some(Side::Human) => ("You win! (q to quit)", Rgb::new(0, 255, 0)),
                _ => ("You lose! (q to quit)", Rgb::new(255, 0, 0)),
            };
            let style = CellStyle {
                fg: color,
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            let tx = viewport.width.saturating_sub(text.len() as u16) / 2;
            let ty = start_y.saturating_sub(1).min(viewport.height.saturating_sub(1));
            fb.put_str(tx, ty, text, style);
        }

        fb
    }

    fn draw_side(&self, fb: &mut FrameBuffer, side: &SideState, title: &str, x0: u16, y0: u16) {
        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = BOARD_HEIGHT as u16;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let well = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        fb.put_str(x0 + 1, y0.saturating_sub(1), title, label);

        self.draw_border(fb, x0, y0, board_w + 2, board_h + 2, border);
        fb.fill_rect(x0 + 1, y0 + 1, board_w, board_h, ' ', well);

        // Locked cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if let Some(Some(kind)) = side.board().get(x, y) {
                    self.fill_board_cell(fb, x0, y0, x as u16, y as u16, piece_color(kind));
                }
            }
        }

        // Active piece; cells above the visible top are clipped.
        if let Some(active) = side.active() {
            let color = piece_color(active.kind);
            for &(dx, dy) in active.shape.iter() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_board_cell(fb, x0, y0, x as u16, y as u16, color);
                }
            }
        }
    }

    fn fill_board_cell(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: u16, y: u16, color: Rgb) {
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: color,
            bold: false,
        };
        for dx in 0..self.cell_w {
            fb.put_char(x0 + 1 + x * self.cell_w + dx, y0 + 1 + y, ' ', style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }
}
