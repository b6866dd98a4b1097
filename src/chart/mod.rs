//! The caller-facing chart operations.
//!
//! Each operation validates input shape, composes the full frame into a
//! `String` (the `render_*` functions, handy for tests), then emits it
//! through a [`Sink`](crate::render::Sink).  Bad input never propagates as
//! an error: it renders as a literal message in place of the chart and the
//! call returns `Ok`.

mod bar;
mod hist;
mod pie;
mod xy;

pub use bar::{bar, render_bar};
pub use hist::{hist, render_hist};
pub use pie::{pie, render_pie};
pub use xy::{line, render_line, render_scatter, scatter};

/// Literal messages written in place of a chart on bad input.
pub const ERR_INVALID_INPUT: &str =
    "Error: Invalid input. Labels and values must be non-empty and of the same length.";
pub const ERR_EMPTY_DATA: &str = "Error: Input data cannot be empty.";
pub const ERR_IDENTICAL_DATA: &str =
    "Error: All data points are the same, cannot create meaningful bins.";
pub const ERR_NO_BIN_HITS: &str = "No data points fell into any bin.";
