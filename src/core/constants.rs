//! A collection of constants.

/// Numbers on tick labels are rounded to the first decimal place.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;

/// Extra space reserved in the y-label margin beyond the widest label.
pub const Y_LABEL_PAD: usize = 2;

/// Roughly this many ticks per axis (plus the mandatory first/last).
pub const TICK_DIVISIONS: usize = 5;

/// Default total width of a bar chart, labels and value column included.
pub const DEFAULT_BAR_WIDTH: usize = 80;
/// Columns a bar row spends on ` | ` and the trailing value gap.
pub const BAR_GUTTER: usize = 5;

/// Default plot-area size for scatter and line charts.
pub const DEFAULT_XY_WIDTH: usize = 50;
pub const DEFAULT_XY_HEIGHT: usize = 20;

/// Default pie radius in cells (grid side is twice this).
pub const DEFAULT_PIE_RADIUS: usize = 10;

/// Histogram defaults.
pub const DEFAULT_HIST_BINS: usize = 10;
pub const DEFAULT_HIST_WIDTH: usize = 80;
pub const DEFAULT_HIST_HEIGHT: usize = 10;

/// Marker used for series that don't pick one.
pub const DEFAULT_MARKER: char = '*';
/// Solid block used for bars, pie sectors and histogram columns.
pub const FILL_CHAR: char = '█';
