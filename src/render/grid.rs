//! Mutable character-cell canvas.
//!
//! Rows grow downward (row 0 is the top line); the vertical data mapping
//! flips sign before it gets here.  Writes outside the canvas are dropped
//! silently so the rasterizer never has to bounds-check its stepping.

use crate::core::color::{Color, RESET};

/// One display cell: a glyph plus optional colour.
///
/// Colour is kept structured rather than baked into an escape string so the
/// geometry never depends on terminal encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Self = Self {
        glyph: ' ',
        color: Color::None,
    };
}

/// Fixed-size width x height canvas, blank-initialised.
///
/// Dimensions never change during a render; a fresh grid is built per call.
/// Later writes win at shared coordinates (no blending).
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Square canvas of side `2 * radius`, for pie charts.
    #[must_use]
    pub fn square(radius: usize) -> Self {
        Self::new(radius * 2, radius * 2)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Set the cell at `(col, row)`.  Out-of-bounds writes are discarded.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, glyph: char, color: Color) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = Cell { glyph, color };
        }
    }

    /// Signed-coordinate variant used by the rasterizer mid-step.
    #[inline]
    pub fn set_signed(&mut self, col: i64, row: i64, glyph: char, color: Color) {
        if col >= 0 && row >= 0 {
            #[allow(clippy::cast_sign_loss)]
            self.set(col as usize, row as usize, glyph, color);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        (col < self.width && row < self.height).then(|| self.cells[row * self.width + col])
    }

    #[must_use]
    pub fn row(&self, r: usize) -> &[Cell] {
        &self.cells[r * self.width..(r + 1) * self.width]
    }

    /// Render one row to text, wrapping coloured cells in escape + reset.
    #[must_use]
    pub fn row_text(&self, r: usize) -> String {
        let mut out = String::with_capacity(self.width);
        for cell in self.row(r) {
            if cell.color.is_none() {
                out.push(cell.glyph);
            } else {
                out.push_str(cell.color.code());
                out.push(cell.glyph);
                out.push_str(RESET);
            }
        }
        out
    }

    /// All rows rendered top to bottom.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|r| self.row_text(r)).collect()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank() {
        let g = Grid::new(3, 2);
        assert_eq!(g.lines(), vec!["   ", "   "]);
    }

    #[test]
    fn out_of_bounds_set_is_silent() {
        let mut g = Grid::new(3, 2);
        g.set(3, 0, 'x', Color::None);
        g.set(0, 2, 'x', Color::None);
        g.set_signed(-1, 0, 'x', Color::None);
        g.set_signed(0, -1, 'x', Color::None);
        assert_eq!(g.lines(), vec!["   ", "   "]);
    }

    #[test]
    fn last_write_wins() {
        let mut g = Grid::new(2, 1);
        g.set(0, 0, 'a', Color::None);
        g.set(0, 0, 'b', Color::Red);
        assert_eq!(
            g.get(0, 0),
            Some(Cell {
                glyph: 'b',
                color: Color::Red
            })
        );
    }

    #[test]
    fn colored_cells_wrap_in_escapes() {
        let mut g = Grid::new(2, 1);
        g.set(0, 0, '*', Color::Blue);
        assert_eq!(g.row_text(0), "\x1b[34m*\x1b[0m ");
    }
}
