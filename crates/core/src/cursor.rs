//! Cursor module - the player's selected cell
//!
//! Holds coordinates only; the grid is never touched from here. `x` runs along
//! the stack length (grid row) and `y` along its width (grid column).

use crate::grid::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    x: usize,
    y: usize,
    length: usize,
    width: usize,
    select: bool,
    refresh: bool,
}

impl Cursor {
    /// Create a cursor at the origin of a `length x width` stack
    pub fn new(length: usize, width: usize) -> Self {
        Self {
            x: 0,
            y: 0,
            length,
            width,
            select: false,
            refresh: true,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Grid coordinate under the cursor.
    pub fn position(&self) -> Pos {
        (self.x, self.y)
    }

    pub fn selecting(&self) -> bool {
        self.select
    }

    /// Step the cursor by one cell.
    ///
    /// Moves that would leave the stack are ignored. When selection is armed, a
    /// successful move disarms it and returns the pair of cells to swap; the
    /// cursor ends up on the cell the selected panel moves to.
    pub fn move_by(&mut self, dx: isize, dy: isize) -> Option<(Pos, Pos)> {
        let nx = self.x.checked_add_signed(dx).filter(|&x| x < self.length)?;
        let ny = self.y.checked_add_signed(dy).filter(|&y| y < self.width)?;
        if (nx, ny) == (self.x, self.y) {
            return None;
        }

        let from = self.position();
        self.x = nx;
        self.y = ny;
        self.refresh = true;

        if self.select {
            self.select = false;
            Some((from, (nx, ny)))
        } else {
            None
        }
    }

    pub fn toggle_select(&mut self) {
        self.select = !self.select;
        self.refresh = true;
    }

    /// Back to the origin with selection cleared.
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
        self.select = false;
        self.refresh = true;
    }

    /// Report and clear the redraw flag.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh)
    }
}
