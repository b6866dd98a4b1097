//! Aggregates the "business logic" layer.

pub mod color;
pub mod constants;
pub mod data;
pub mod error;
pub mod options;
pub mod scale;
pub mod series;

// re-export frequently-used items for convenience
pub use color::{Color, PALETTE, RESET, colorize};
pub use constants::{DECIMAL_PRECISION, DEFAULT_MARKER, FILL_CHAR};
pub use error::GraphError;
pub use options::{BarOptions, HistOptions, PieOptions, XyOptions};
pub use scale::{DataRange, invert_row, scale};
pub use series::Series;
