//! Data-space to grid-space mapping.

use crate::core::series::Series;

/// Map `v` from `[min, max]` onto the integer span `[0, span-1]`.
///
/// A zero-width range collapses every value to 0 rather than dividing by
/// zero; this is defined behaviour, not an error.  Values inside the range
/// always land inside the span.  Out-of-range input is the caller's bug.
#[inline]
#[must_use]
pub fn scale(v: f64, min: f64, max: f64, span: usize) -> usize {
    if max == min || span == 0 {
        return 0;
    }
    let t = (v - min) / (max - min);
    (t * (span - 1) as f64) as usize
}

/// Flip a scaled y coordinate so that data "up" is row-decreasing.
#[inline]
#[must_use]
pub const fn invert_row(y: usize, height: usize) -> usize {
    height.saturating_sub(1).saturating_sub(y)
}

/// Min/max over both dimensions of every series in one chart call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataRange {
    /// Extrema across all points of all series.  `None` when there are no
    /// points at all.
    #[must_use]
    pub fn of(series: &[Series]) -> Option<Self> {
        let mut r = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for s in series {
            for &x in &s.xs {
                r.x_min = r.x_min.min(x);
                r.x_max = r.x_max.max(x);
            }
            for &y in &s.ys {
                r.y_min = r.y_min.min(y);
                r.y_max = r.y_max.max(y);
            }
        }
        (r.x_min.is_finite() && r.y_min.is_finite()).then_some(r)
    }

    #[inline]
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_maps_to_zero() {
        for v in [-3.0, 0.0, 7.5] {
            assert_eq!(scale(v, 4.0, 4.0, 50), 0);
        }
    }

    #[test]
    fn in_range_values_stay_in_span() {
        for i in 0..=100 {
            let v = f64::from(i) / 10.0;
            let c = scale(v, 0.0, 10.0, 20);
            assert!(c <= 19, "v={v} mapped to {c}");
        }
        assert_eq!(scale(0.0, 0.0, 10.0, 20), 0);
        assert_eq!(scale(10.0, 0.0, 10.0, 20), 19);
    }

    #[test]
    fn row_inversion_puts_min_at_bottom() {
        assert_eq!(invert_row(0, 20), 19);
        assert_eq!(invert_row(19, 20), 0);
    }

    #[test]
    fn range_covers_all_series() {
        let a = Series::new(vec![1.0, 5.0], vec![2.0, 4.0]);
        let b = Series::new(vec![-2.0, 3.0], vec![0.0, 9.0]);
        let r = DataRange::of(&[a, b]).unwrap();
        assert_eq!(r.x_min, -2.0);
        assert_eq!(r.x_max, 5.0);
        assert_eq!(r.y_min, 0.0);
        assert_eq!(r.y_max, 9.0);
    }

    #[test]
    fn empty_series_have_no_range() {
        assert!(DataRange::of(&[]).is_none());
        assert!(DataRange::of(&[Series::new(vec![], vec![])]).is_none());
    }
}
