//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: a two-row header (score, speed, status) and below it the stack,
//! lying on its side. Grid row `r` is screen column `x0 + r`, so the stack grows
//! from the left and the boundary row is the rightmost column; grid column `c`
//! is screen row `y0 + c`.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{StatusLine, BOUNDARY_MARKER};

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

/// Header field columns, each field two rows tall.
pub const SCORE_X: u16 = 0;
pub const SPEED_X: u16 = 20;
pub const STATUS_X: u16 = 40;
pub const HEADER_ROWS: u16 = 2;

const BG: Rgb = Rgb::new(0, 0, 0);

const PALETTE: [Rgb; 6] = [
    Rgb::new(220, 80, 80),
    Rgb::new(100, 220, 120),
    Rgb::new(80, 160, 240),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(80, 220, 220),
];

/// Two status lines for each status.
pub fn status_text(status: StatusLine) -> [&'static str; 2] {
    match status {
        StatusLine::Directions => ["Move: arrows/hjkl", "Space swap  P pause  Q quit"],
        StatusLine::Selecting => ["Select", "Move to swap"],
        StatusLine::Paused => ["Paused", "Press P to resume"],
        StatusLine::GameOver => ["Game Over", "Again (y/n)?"],
    }
}

/// A lightweight terminal renderer for the panel stack.
#[derive(Debug, Clone)]
pub struct GameView {
    cursor_bg: Rgb,
    select_bg: Rgb,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cursor_bg: Rgb::new(90, 90, 110),
            select_bg: Rgb::new(200, 160, 40),
        }
    }
}

impl GameView {
    /// Top-left screen cell of the stack for a viewport.
    pub fn stack_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let length = clamp_u16(snap.length);
        let width = clamp_u16(snap.width);
        let x = viewport.width.saturating_sub(length) / 2;
        let y = viewport
            .height
            .saturating_sub(HEADER_ROWS)
            .saturating_sub(width)
            / 2
            + HEADER_ROWS;
        (x, y)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        self.draw_header(fb, snap);

        let (start_x, start_y) = self.stack_origin(snap, viewport);
        let boundary = snap.length.saturating_sub(1);

        for row in 0..snap.length {
            for col in 0..snap.width {
                let cell = snap.cell(row, col);
                let (ch, mut style) = match snap.glyph(cell) {
                    Some(ch) => {
                        let sym = cell.map_or(0, |s| s.index());
                        (ch, CellStyle::plain(PALETTE[sym % PALETTE.len()], BG).bold())
                    }
                    None if row == boundary => (
                        BOUNDARY_MARKER,
                        CellStyle {
                            dim: true,
                            ..CellStyle::plain(Rgb::new(140, 140, 140), BG)
                        },
                    ),
                    None => (' ', CellStyle::plain(Rgb::new(220, 220, 220), BG)),
                };

                if (row, col) == (snap.cursor.x, snap.cursor.y) {
                    style.bg = if snap.cursor.select {
                        self.select_bg
                    } else {
                        self.cursor_bg
                    };
                }

                let x = start_x.saturating_add(clamp_u16(row));
                let y = start_y.saturating_add(clamp_u16(col));
                fb.put_char(x, y, ch, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), BG);

        fb.put_str(SCORE_X, 0, "Score", label);
        fb.put_u64(SCORE_X, 1, snap.score, value);

        fb.put_str(SPEED_X, 0, "Speed", label);
        fb.put_u64(SPEED_X, 1, snap.speed as u64, value);

        let status_style = match snap.status {
            StatusLine::Directions => value,
            _ => label,
        };
        let [first, second] = status_text(snap.status);
        fb.put_str(STATUS_X, 0, first, status_style);
        fb.put_str(STATUS_X, 1, second, value);
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
