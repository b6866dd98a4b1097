//! Tick selection and label overlay for the x/y grid charts.
//!
//! The stepping rule is `step = max(1, n / 5)` with the first and last
//! positions always ticked.  That can give uneven, data-dependent spacing
//! (not exactly five ticks); the rule is load-bearing for output
//! compatibility, so it stays as-is.

use crate::core::constants::{DECIMAL_PRECISION, TICK_DIVISIONS, Y_LABEL_PAD};

/// Distance between ticks along a dimension of length `n`.
#[inline]
#[must_use]
pub const fn tick_step(n: usize) -> usize {
    if n >= TICK_DIVISIONS { n / TICK_DIVISIONS } else { 1 }
}

/// Is position `i` a tick on a dimension of length `n`?
#[inline]
#[must_use]
pub const fn is_tick(i: usize, n: usize) -> bool {
    i % tick_step(n) == 0 || i == 0 || i == n - 1
}

/// Format one tick's data value (one decimal place).
#[inline]
#[must_use]
pub fn format_tick(v: f64) -> String {
    format!("{:.*}", DECIMAL_PRECISION, v)
}

/// Width of the left label margin: widest expected y label plus padding.
#[inline]
#[must_use]
pub fn y_margin_width(y_max: f64) -> usize {
    format_tick(y_max).len() + Y_LABEL_PAD
}

/// Data value shown beside row `r` (row 0 is the top of the grid).
#[inline]
#[must_use]
pub fn y_tick_value(r: usize, height: usize, y_min: f64, y_span: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let per_row = if height > 1 {
        y_span / (height - 1) as f64
    } else {
        1.0
    };
    #[allow(clippy::cast_precision_loss)]
    let rows_up = (height - 1 - r) as f64;
    y_min + rows_up * per_row
}

/// Data value under column `c`.
#[inline]
#[must_use]
pub fn x_tick_value(c: usize, width: usize, x_min: f64, x_span: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let per_col = if width > 1 {
        x_span / (width - 1) as f64
    } else {
        1.0
    };
    #[allow(clippy::cast_precision_loss)]
    let cols = c as f64;
    x_min + cols * per_col
}

/// The margin text for row `r`: the tick label left-aligned and silently
/// truncated to `margin` columns, or all blanks on non-tick rows.
#[must_use]
pub fn y_margin_text(r: usize, height: usize, y_min: f64, y_span: f64, margin: usize) -> String {
    let mut buf = vec![' '; margin];
    if is_tick(r, height) {
        let label = format_tick(y_tick_value(r, height, y_min, y_span));
        for (i, ch) in label.chars().enumerate() {
            if i < margin {
                buf[i] = ch;
            }
        }
    }
    buf.into_iter().collect()
}

/// The single x-tick label row emitted under the grid.
///
/// Each tick's label starts at `margin + c`; a label that would run past the
/// row is skipped whole (never truncated), leaving blanks.
#[must_use]
pub fn x_tick_row(width: usize, margin: usize, x_min: f64, x_span: f64) -> String {
    let total = width + margin;
    let mut buf = vec![' '; total];
    for c in 0..width {
        if !is_tick(c, width) {
            continue;
        }
        let label = format_tick(x_tick_value(c, width, x_min, x_span));
        if margin + c + label.len() < total {
            for (i, ch) in label.chars().enumerate() {
                buf[margin + c + i] = ch;
            }
        }
    }
    buf.into_iter().collect()
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_never_zero() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(3), 1);
        assert_eq!(tick_step(5), 1);
        assert_eq!(tick_step(20), 4);
        assert_eq!(tick_step(50), 10);
    }

    #[test]
    fn ends_are_always_ticks() {
        assert!(is_tick(0, 7));
        assert!(is_tick(6, 7));
        assert!(is_tick(19, 20));
        assert!(!is_tick(3, 20));
    }

    #[test]
    fn y_values_run_max_at_top_to_min_at_bottom() {
        let h = 20;
        assert_eq!(y_tick_value(0, h, 0.0, 10.0), 10.0);
        assert_eq!(y_tick_value(h - 1, h, 0.0, 10.0), 0.0);
    }

    #[test]
    fn single_row_grid_uses_unit_spacing() {
        assert_eq!(y_tick_value(0, 1, 3.0, 0.0), 3.0);
        assert_eq!(x_tick_value(0, 1, 3.0, 0.0), 3.0);
    }

    #[test]
    fn margin_truncates_long_labels() {
        let text = y_margin_text(0, 2, 0.0, 12345.0, 4);
        assert_eq!(text.len(), 4);
        assert_eq!(text, "1234");
    }

    #[test]
    fn overflowing_x_label_is_skipped_not_truncated() {
        // width 30, margin 0: ticks at 0, 6, 12, 18, 24 and 29; the label
        // for col 29 ("29.0") would run past the row and is dropped whole.
        let row = x_tick_row(30, 0, 0.0, 29.0);
        assert_eq!(row.len(), 30);
        assert!(row.starts_with("0.0"));
        assert_eq!(&row[24..28], "24.0");
        assert_eq!(&row[28..], "  ", "skipped label leaves blanks: {row:?}");
    }
}
