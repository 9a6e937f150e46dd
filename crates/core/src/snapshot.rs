use crate::types::{Cell, Mode, StatusLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorSnapshot {
    pub x: usize,
    pub y: usize,
    pub select: bool,
}

/// Everything a render sink needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub length: usize,
    pub width: usize,
    /// Row-major cells, `row * width + col`.
    pub board: Vec<Cell>,
    pub symbols: Vec<char>,
    pub cursor: CursorSnapshot,
    pub score: u64,
    pub speed: u32,
    pub panels_cleared: u64,
    pub mode: Mode,
    pub status: StatusLine,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.length || col >= self.width {
            return None;
        }
        self.board[row * self.width + col]
    }

    /// Glyph for a cell; symbols outside the alphabet show as `?`.
    pub fn glyph(&self, cell: Cell) -> Option<char> {
        cell.map(|sym| self.symbols.get(sym.index()).copied().unwrap_or('?'))
    }
}
