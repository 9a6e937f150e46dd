//! Grid module - the panel stack
//!
//! The stack is a `length x width` grid where each cell is empty or holds a symbol.
//! Uses a flat row-major vector (row * width + col) since dimensions are only known
//! at game start.
//!
//! Row 0 is the insertion edge: advances push new rows in there and panels fall
//! toward it. Row `length - 1` is the far boundary; anything pushed past it is lost.

use crate::rng::SimpleRng;
use crate::scoring::chain_score;
use crate::types::{
    Cell, ChainResult, Symbol, UpdateResult, INITIAL_FILL_DENOMINATOR, INITIAL_FILL_NUMERATOR,
    MIN_MATCH,
};

/// A grid coordinate as `(row, col)`.
pub type Pos = (usize, usize);

/// The panel stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    length: usize,
    width: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(length: usize, width: usize) -> Self {
        Self {
            length,
            width,
            cells: vec![None; length * width],
        }
    }

    /// Build a grid from text rows, row 0 first.
    ///
    /// `.` is an empty cell and the digits `0`-`9` are symbol indices. Returns
    /// `None` for ragged rows or unknown characters.
    pub fn from_text(rows: &[&str]) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for ch in row.chars() {
                let cell = match ch {
                    '.' => None,
                    d => Some(Symbol(d.to_digit(10)? as u8)),
                };
                cells.push(cell);
            }
        }
        Some(Self {
            length: rows.len(),
            width,
            cells,
        })
    }

    /// Inverse of [`Grid::from_text`] (symbols above 9 render as `?`).
    pub fn to_text(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.length)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        None => '.',
                        Some(sym) => char::from_digit(sym.0 as u32, 10).unwrap_or('?'),
                    })
                    .collect()
            })
            .collect()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.length || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get cell at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// One row of cells, or None if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.length {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Check if a row holds no panels (out-of-bounds rows count as empty)
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .map_or(true, |cells| cells.iter().all(|cell| cell.is_none()))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Whether any row or column holds a run of `MIN_MATCH` identical symbols.
    pub fn has_runs(&self) -> bool {
        let mut marks = vec![false; self.cells.len()];
        self.mark_runs(&mut marks)
    }

    /// Fill the grid with a fresh starting stack.
    ///
    /// Rows from three quarters of the length onward stay empty. Every other cell
    /// is drawn from `symbol_count + 1` outcomes, the last meaning empty; a cell
    /// above an empty cell stays empty so columns rest on row 0. A symbol that
    /// would complete a run behind it along its row or column is redrawn.
    pub fn build_initial_stack(&mut self, rng: &mut SimpleRng, symbol_count: u8) {
        self.clear();
        let empty = symbol_count as u32;

        for row in 0..self.length {
            if row * INITIAL_FILL_DENOMINATOR >= self.length * INITIAL_FILL_NUMERATOR {
                break;
            }
            for col in 0..self.width {
                if row > 0 && self.cells[(row - 1) * self.width + col].is_none() {
                    continue;
                }
                loop {
                    let draw = rng.next_range(empty + 1);
                    if draw == empty {
                        break;
                    }
                    let sym = Symbol(draw as u8);
                    if !self.completes_run(row, col, sym, 0, 1)
                        && !self.completes_run(row, col, sym, 1, 0)
                    {
                        self.cells[row * self.width + col] = Some(sym);
                        break;
                    }
                }
            }
        }
    }

    /// Push a fresh, fully populated row in at row 0.
    ///
    /// Every row moves one index up and the boundary row is discarded. The new row
    /// has no run within itself; runs against the row it pushes are left for
    /// [`Grid::check_stack`].
    pub fn advance_stack(&mut self, rng: &mut SimpleRng, symbol_count: u8) {
        let width = self.width;
        if self.length == 0 {
            return;
        }
        // Shift all rows up by one (copy_within handles the overlap)
        self.cells.copy_within(0..(self.length - 1) * width, width);

        let n = symbol_count as u32;
        for col in 0..width {
            let sym = loop {
                let sym = Symbol(rng.next_range(n) as u8);
                // A single-symbol alphabet cannot avoid runs.
                if n < 2 || !self.completes_run(0, col, sym, 0, 1) {
                    break sym;
                }
            };
            self.cells[col] = Some(sym);
        }
    }

    /// Exchange two cells, then resolve whatever runs the swap made.
    pub fn swap_panel(&mut self, a: Pos, b: Pos) -> ChainResult {
        let (Some(ia), Some(ib)) = (self.index(a.0, a.1), self.index(b.0, b.1)) else {
            debug_assert!(false, "swap outside the grid: {:?} <-> {:?}", a, b);
            return ChainResult::default();
        };
        self.cells.swap(ia, ib);
        self.check_stack()
    }

    /// Eliminate runs and compact until nothing moves.
    ///
    /// Each pass marks every run against the pre-elimination grid, clears the
    /// marks in one batch, then lets panels fall. A pass that moved panels is
    /// followed by another; the per-pass elimination counts fold into the chain
    /// score.
    pub fn check_stack(&mut self) -> ChainResult {
        let mut passes: Vec<u32> = Vec::new();
        loop {
            passes.push(self.eliminate_runs());
            if !self.compact() {
                break;
            }
        }

        let eliminated = passes.iter().sum();
        let score = chain_score(&passes);
        if eliminated > 0 {
            log::debug!(
                "chain of {} passes eliminated {} panels for {} points",
                passes.len(),
                eliminated,
                score
            );
        }
        ChainResult { eliminated, score }
    }

    /// Let panels fall toward row 0 until they rest on another panel or the edge.
    /// Returns whether any panel moved.
    pub fn compact(&mut self) -> bool {
        let width = self.width;
        let mut moved = false;

        for col in 0..width {
            // Two-pointer pass: `write` is the lowest free row in this column.
            let mut write = 0;
            for read in 0..self.length {
                let src = read * width + col;
                if self.cells[src].is_none() {
                    continue;
                }
                if write != read {
                    self.cells[write * width + col] = self.cells[src];
                    self.cells[src] = None;
                    moved = true;
                }
                write += 1;
            }
        }

        moved
    }

    /// Advance, resolve runs, and report whether the stack overflowed.
    ///
    /// Game over is decided by row `length - 2` before the advance: whatever it
    /// holds is about to be pushed into the boundary row.
    pub fn update_stack(&mut self, rng: &mut SimpleRng, symbol_count: u8) -> UpdateResult {
        let game_over = !self.is_row_empty(self.length.saturating_sub(2));
        self.advance_stack(rng, symbol_count);
        let chain = self.check_stack();
        UpdateResult { chain, game_over }
    }

    /// Check whether `sym` at `(row, col)` would complete a run with the
    /// `MIN_MATCH - 1` cells behind it, stepping back by `(d_row, d_col)`.
    fn completes_run(
        &self,
        row: usize,
        col: usize,
        sym: Symbol,
        d_row: usize,
        d_col: usize,
    ) -> bool {
        let behind = MIN_MATCH - 1;
        if row < behind * d_row || col < behind * d_col {
            return false;
        }
        (1..=behind)
            .all(|k| self.cells[(row - k * d_row) * self.width + (col - k * d_col)] == Some(sym))
    }

    /// Mark every cell that belongs to a run. Returns whether anything was marked.
    fn mark_runs(&self, marks: &mut [bool]) -> bool {
        let width = self.width;
        let mut any = false;

        for row in 0..self.length {
            for col in 0..width {
                let Some(sym) = self.cells[row * width + col] else {
                    continue;
                };

                // Forward along the row.
                let mut end = col + 1;
                while end < width && self.cells[row * width + end] == Some(sym) {
                    end += 1;
                }
                if end - col >= MIN_MATCH {
                    for c in col..end {
                        marks[row * width + c] = true;
                    }
                    any = true;
                }

                // Forward along the column.
                let mut end = row + 1;
                while end < self.length && self.cells[end * width + col] == Some(sym) {
                    end += 1;
                }
                if end - row >= MIN_MATCH {
                    for r in row..end {
                        marks[r * width + col] = true;
                    }
                    any = true;
                }
            }
        }

        any
    }

    /// Clear every run in one batch; returns the number of cells cleared.
    fn eliminate_runs(&mut self) -> u32 {
        let mut marks = vec![false; self.cells.len()];
        if !self.mark_runs(&mut marks) {
            return 0;
        }

        let mut eliminated = 0;
        for (cell, marked) in self.cells.iter_mut().zip(marks) {
            if marked {
                *cell = None;
                eliminated += 1;
            }
        }
        eliminated
    }
}
