//! Public-facing crate root – re-exports for library callers.
//!
//! Charts render to character grids: map data ranges onto integer cells,
//! rasterize points/segments/sectors, overlay axis ticks, compose the frame
//! and hand the text to stdout or a file.  Every render call is stateless;
//! the only persistent resource is the read-only color table.

pub mod chart;
pub mod cli;
pub mod core;
pub mod render;

pub use chart::{
    bar, hist, line, pie, render_bar, render_hist, render_line, render_pie, render_scatter,
    scatter,
};

pub use core::{
    color::{Color, PALETTE, colorize},
    error::GraphError,
    options::{BarOptions, HistOptions, PieOptions, XyOptions},
    scale::{DataRange, scale},
    series::Series,
};

pub use render::{Grid, Sector, Sink};
