//! Pie chart on a square grid, with an optional legend.

use std::f64::consts::PI;

use crate::{
    chart::ERR_INVALID_INPUT,
    core::{
        color::{PALETTE, colorize},
        constants::FILL_CHAR,
        error::GraphError,
        options::PieOptions,
    },
    render::{
        frame::{format_value, join_lines, push_title},
        grid::Grid,
        raster::{Sector, fill_sector},
        sink::Sink,
    },
};

/// Compose a pie-chart frame.
///
/// Each value claims an angular interval `[start, end)` proportional to its
/// share of the total and is painted by a full-grid sector scan; colours
/// cycle through the palette in input order.  The grid is emitted with no
/// border; the legend lists swatch, label, raw value and percentage.
#[must_use]
pub fn render_pie<S: AsRef<str>>(labels: &[S], values: &[f64], opts: &PieOptions) -> String {
    let mut lines = Vec::new();
    push_title(&mut lines, opts.title.as_deref(), opts.radius * 2);

    if labels.is_empty() || values.is_empty() || labels.len() != values.len() {
        lines.push(ERR_INVALID_INPUT.to_owned());
        return join_lines(&lines);
    }

    let total: f64 = values.iter().sum();
    let mut grid = Grid::square(opts.radius);

    let mut start = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let end = start + (v / total) * 2.0 * PI;
        let color = PALETTE[i % PALETTE.len()];
        fill_sector(&mut grid, opts.radius, Sector { start, end }, FILL_CHAR, color);
        start = end;
    }

    lines.extend(grid.lines());

    if opts.legend {
        lines.push(String::new());
        lines.push("Legend:".to_owned());
        let swatch = FILL_CHAR.to_string();
        for (i, (label, &v)) in labels.iter().zip(values).enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            lines.push(format!(
                "{} {}: {} ({:.1}%)",
                colorize(color, &swatch),
                label.as_ref(),
                format_value(v),
                (v / total) * 100.0
            ));
        }
    }
    lines.push(String::new());
    lines.push(String::new());

    join_lines(&lines)
}

/// Render a pie chart to stdout.
pub fn pie<S: AsRef<str>>(
    labels: &[S],
    values: &[f64],
    opts: &PieOptions,
) -> Result<(), GraphError> {
    Sink::Stdout.emit(&render_pie(labels, values, opts))?;
    Ok(())
}

// --- Tests ---
