//! One plottable point sequence.

use crate::core::{color::Color, constants::DEFAULT_MARKER};

/// An ordered sequence of (x, y) pairs sharing one colour and one marker.
///
/// Immutable once handed to a renderer.  Several series may be overlaid on
/// one chart; they share a single [`DataRange`](crate::core::scale::DataRange)
/// and later series overwrite earlier ones at shared cells.
#[derive(Clone, Debug)]
pub struct Series {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: Color,
    pub marker: char,
}

impl Series {
    #[must_use]
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self {
            xs,
            ys,
            color: Color::None,
            marker: DEFAULT_MARKER,
        }
    }

    #[inline]
    #[must_use]
    pub fn color<C: Into<Color>>(mut self, c: C) -> Self {
        self.color = c.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn marker(mut self, m: char) -> Self {
        self.marker = m;
        self
    }

    /// Number of plottable pairs (shorter of the two coordinate vectors).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len().min(self.ys.len())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the (x, y) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
