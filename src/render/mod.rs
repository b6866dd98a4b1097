//! The grid-based rendering engine.

pub mod axis;
pub mod frame;
pub mod grid;
pub mod raster;
pub mod sink;

pub use grid::{Cell, Grid};
pub use raster::{Sector, draw_segment, fill_sector, plot_point};
pub use sink::Sink;
