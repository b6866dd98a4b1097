//! Point, segment and sector rasterization onto a [`Grid`].
//!
//! The segment algorithm is integer Bresenham: step the dominant axis every
//! iteration, accumulate signed error in the other, step it when the doubled
//! error crosses the threshold.  Pixel selection is exact and independent of
//! float arithmetic, both endpoints are always plotted, and cells that fall
//! outside the canvas are skipped rather than erroring.

use std::f64::consts::PI;

use crate::{core::color::Color, render::grid::Grid};

/// Plot one cell at a mapped coordinate.
#[inline]
pub fn plot_point(grid: &mut Grid, col: usize, row: usize, glyph: char, color: Color) {
    grid.set(col, row, glyph, color);
}

/// Draw the segment from `(x0, y0)` to `(x1, y1)` inclusive.
///
/// A standalone pure function: no captured state, call it once per
/// consecutive point pair of a series.
pub fn draw_segment(
    grid: &mut Grid,
    (mut x0, mut y0): (i64, i64),
    (x1, y1): (i64, i64),
    glyph: char,
    color: Color,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        grid.set_signed(x0, y0, glyph, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Angular half-open interval `[start, end)` in radians over `[0, 2*pi)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub start: f64,
    pub end: f64,
}

impl Sector {
    #[inline]
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        self.start <= angle && angle < self.end
    }
}

/// Paint every cell of `sector` onto a square grid of side `2 * radius`
/// centred at `(radius, radius)`.
///
/// Scans the full square: a cell belongs to the sector when its squared
/// distance from the centre is within `radius^2` and its polar angle
/// (normalised into `[0, 2*pi)`) falls inside the interval.  Boundary cells
/// placed ambiguously by float rounding go to whichever sector is painted
/// last.
pub fn fill_sector(grid: &mut Grid, radius: usize, sector: Sector, glyph: char, color: Color) {
    #[allow(clippy::cast_possible_wrap)]
    let r = radius as i64;
    let r2 = r * r;
    let side = radius * 2;

    for y in 0..side {
        for x in 0..side {
            #[allow(clippy::cast_possible_wrap)]
            let (dx, dy) = (x as i64 - r, y as i64 - r);
            if dx * dx + dy * dy > r2 {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let mut angle = (dy as f64).atan2(dx as f64);
            if angle < 0.0 {
                angle += 2.0 * PI;
            }
            if sector.contains(angle) {
                grid.set(x, y, glyph, color);
            }
        }
    }
}

// --- Tests ---
