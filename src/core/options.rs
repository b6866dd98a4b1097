//! Per-chart render options with fluent builders.
//!
//! Every field has a usable default, so there is no fallible `build` step;
//! options are plain structs tweaked in place.

use std::path::PathBuf;

use crate::core::{
    color::Color,
    constants::{
        DEFAULT_BAR_WIDTH, DEFAULT_HIST_BINS, DEFAULT_HIST_HEIGHT, DEFAULT_HIST_WIDTH,
        DEFAULT_PIE_RADIUS, DEFAULT_XY_HEIGHT, DEFAULT_XY_WIDTH, FILL_CHAR,
    },
};

/// Options for [`bar`](crate::chart::bar).
#[derive(Clone, Debug)]
pub struct BarOptions {
    pub max_width: usize,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub color: Color,
    pub output_file: Option<PathBuf>,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_BAR_WIDTH,
            title: None,
            xlabel: None,
            ylabel: None,
            color: Color::None,
            output_file: None,
        }
    }
}

impl BarOptions {
    #[inline]
    #[must_use]
    pub fn max_width(mut self, w: usize) -> Self {
        self.max_width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn xlabel(mut self, l: impl Into<String>) -> Self {
        self.xlabel = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn ylabel(mut self, l: impl Into<String>) -> Self {
        self.ylabel = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color<C: Into<Color>>(mut self, c: C) -> Self {
        self.color = c.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn output_file(mut self, p: impl Into<PathBuf>) -> Self {
        self.output_file = Some(p.into());
        self
    }
}

/// Shared options for [`scatter`](crate::chart::scatter) and
/// [`line`](crate::chart::line).
#[derive(Clone, Debug)]
pub struct XyOptions {
    pub width: usize,
    pub height: usize,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    /// Accepted for signature parity with the other charts; the x/y frame
    /// reserves no space for a y-axis caption (ticks label the axis).
    pub ylabel: Option<String>,
    /// Fallback for series that carry no colour of their own.
    pub color: Color,
    pub output_file: Option<PathBuf>,
}

impl Default for XyOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_XY_WIDTH,
            height: DEFAULT_XY_HEIGHT,
            title: None,
            xlabel: None,
            ylabel: None,
            color: Color::None,
            output_file: None,
        }
    }
}

impl XyOptions {
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = h;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn xlabel(mut self, l: impl Into<String>) -> Self {
        self.xlabel = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn ylabel(mut self, l: impl Into<String>) -> Self {
        self.ylabel = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color<C: Into<Color>>(mut self, c: C) -> Self {
        self.color = c.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn output_file(mut self, p: impl Into<PathBuf>) -> Self {
        self.output_file = Some(p.into());
        self
    }
}

/// Options for [`pie`](crate::chart::pie).  Pie charts always print to
/// stdout.
#[derive(Clone, Debug)]
pub struct PieOptions {
    pub radius: usize,
    pub title: Option<String>,
    pub legend: bool,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_PIE_RADIUS,
            title: None,
            legend: true,
        }
    }
}

impl PieOptions {
    #[inline]
    #[must_use]
    pub fn radius(mut self, r: usize) -> Self {
        self.radius = r;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn legend(mut self, on: bool) -> Self {
        self.legend = on;
        self
    }
}

/// Options for [`hist`](crate::chart::hist).  Histograms always print to
/// stdout.
#[derive(Clone, Debug)]
pub struct HistOptions {
    pub bins: usize,
    pub width: usize,
    pub height: usize,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub color: Color,
    pub fill: char,
}

impl Default for HistOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_HIST_BINS,
            width: DEFAULT_HIST_WIDTH,
            height: DEFAULT_HIST_HEIGHT,
            title: None,
            xlabel: None,
            ylabel: None,
            color: Color::None,
            fill: FILL_CHAR,
        }
    }
}

impl HistOptions {
    #[inline]
    #[must_use]
    pub fn bins(mut self, n: usize) -> Self {
        self.bins = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = h;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn xlabel(mut self, l: impl Into<String>) -> Self {
        self.xlabel = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn ylabel(mut self, l: impl Into<String>) -> Self {
        self.ylabel = Some(l.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color<C: Into<Color>>(mut self, c: C) -> Self {
        self.color = c.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn fill(mut self, c: char) -> Self {
        self.fill = c;
        self
    }
}
