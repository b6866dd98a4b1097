//! Scatter and line charts on a bordered x/y grid.
//!
//! The two differ only in rasterization (points vs. Bresenham segments);
//! range computation, axis annotation and frame composition are shared.

use crate::{
    chart::ERR_EMPTY_DATA,
    core::{
        error::GraphError,
        options::XyOptions,
        scale::{DataRange, invert_row, scale},
        series::Series,
    },
    render::{
        axis::{x_tick_row, y_margin_text, y_margin_width},
        frame::{join_lines, push_title, push_xlabel},
        grid::Grid,
        raster::{draw_segment, plot_point},
        sink::Sink,
    },
};

#[derive(Clone, Copy)]
enum Style {
    Points,
    Segments,
}

fn render_xy(series: &[Series], opts: &XyOptions, style: Style) -> String {
    let Some(range) = DataRange::of(series) else {
        return ERR_EMPTY_DATA.to_owned();
    };

    let mut lines = Vec::new();
    push_title(&mut lines, opts.title.as_deref(), opts.width);

    let (width, height) = (opts.width, opts.height);
    let mut grid = Grid::new(width, height);

    for s in series {
        let color = if s.color.is_none() { opts.color } else { s.color };

        let mapped = s.points().map(|(x, y)| {
            let col = scale(x, range.x_min, range.x_max, width);
            let row = invert_row(scale(y, range.y_min, range.y_max, height), height);
            (col, row)
        });

        match style {
            Style::Points => {
                for (col, row) in mapped {
                    plot_point(&mut grid, col, row, s.marker, color);
                }
            }
            Style::Segments => {
                #[allow(clippy::cast_possible_wrap)]
                let pts: Vec<(i64, i64)> = mapped.map(|(c, r)| (c as i64, r as i64)).collect();
                for pair in pts.windows(2) {
                    draw_segment(&mut grid, pair[0], pair[1], s.marker, color);
                }
            }
        }
    }

    let margin = y_margin_width(range.y_max);
    let border = {
        let mut b = String::with_capacity(width + margin + 2);
        b.push('+');
        b.extend(std::iter::repeat_n('-', width + margin));
        b.push('+');
        b
    };

    lines.push(border.clone());
    for r in 0..height {
        let mut row = String::with_capacity(width + margin + 2);
        row.push('|');
        row.push_str(&y_margin_text(r, height, range.y_min, range.y_span(), margin));
        row.push_str(&grid.row_text(r));
        row.push('|');
        lines.push(row);
    }
    lines.push(border);
    lines.push(x_tick_row(width, margin, range.x_min, range.x_span()));

    push_xlabel(&mut lines, opts.xlabel.as_deref(), width + margin);
    lines.push(String::new());
    lines.push(String::new());

    join_lines(&lines)
}

/// Compose a scatter-plot frame.
#[must_use]
pub fn render_scatter(series: &[Series], opts: &XyOptions) -> String {
    render_xy(series, opts, Style::Points)
}

/// Compose a line-chart frame (consecutive points joined by segments).
#[must_use]
pub fn render_line(series: &[Series], opts: &XyOptions) -> String {
    render_xy(series, opts, Style::Segments)
}

/// Render a scatter plot to stdout, or to `opts.output_file` when set.
pub fn scatter(series: &[Series], opts: &XyOptions) -> Result<(), GraphError> {
    let text = render_scatter(series, opts);
    Sink::for_path(opts.output_file.as_deref()).emit(&text)?;
    Ok(())
}

/// Render a line chart to stdout, or to `opts.output_file` when set.
pub fn line(series: &[Series], opts: &XyOptions) -> Result<(), GraphError> {
    let text = render_line(series, opts);
    Sink::for_path(opts.output_file.as_deref()).emit(&text)?;
    Ok(())
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    fn small_opts() -> XyOptions {
        XyOptions::default().width(10).height(5)
    }

    #[test]
    fn empty_series_render_the_literal_error() {
        assert_eq!(
            render_scatter(&[], &XyOptions::default()),
            ERR_EMPTY_DATA
        );
        let empty = Series::new(vec![], vec![]);
        assert_eq!(render_line(&[empty], &small_opts()), ERR_EMPTY_DATA);
    }

    #[test]
    fn frame_has_borders_and_tick_rows() {
        let s = Series::new(vec![0.0, 9.0], vec![0.0, 9.0]);
        let out = render_scatter(&[s], &small_opts());
        let rows: Vec<&str> = out.lines().collect();
        // margin = len("9.0") + 2 = 5 -> total inner width 15
        assert_eq!(rows[0], format!("+{}+", "-".repeat(15)));
        assert_eq!(rows[6], rows[0]);
        // border + 5 grid rows + border + tick row + trailing blank
        assert_eq!(rows.len(), 9);
        for r in &rows[1..6] {
            assert!(r.starts_with('|') && r.ends_with('|'));
        }
        // ticks at columns 0, 2, 4, 6 overwrite each other; 8 and 9 overflow
        assert_eq!(rows[7], "     0.2.4.6.0 ");
    }

    #[test]
    fn extreme_points_land_in_the_corners() {
        let s = Series::new(vec![0.0, 9.0], vec![0.0, 9.0]).marker('x');
        let out = render_scatter(&[s], &small_opts());
        let rows: Vec<&str> = out.lines().collect();
        // max y -> top grid row, last column; min y -> bottom row, first column
        assert_eq!(rows[1].chars().nth_back(1), Some('x'));
        let bottom = rows[5];
        assert_eq!(bottom.chars().nth(6), Some('x')); // first plot column after margin
    }

    #[test]
    fn line_connects_the_endpoints() {
        let s = Series::new(vec![0.0, 9.0], vec![0.0, 4.0]).marker('*');
        let out = render_line(&[s], &small_opts());
        let stars = out.chars().filter(|&c| c == '*').count();
        // a 10-wide segment touches every column exactly once
        assert_eq!(stars, 10);
    }

    #[test]
    fn later_series_overwrite_earlier_cells() {
        let a = Series::new(vec![0.0], vec![0.0]).marker('a');
        let b = Series::new(vec![0.0], vec![0.0]).marker('b');
        let out = render_scatter(
            &[a, b],
            &XyOptions::default().width(3).height(3),
        );
        assert!(out.contains('b'));
        assert!(!out.contains('a'));
    }

    #[test]
    fn series_without_color_fall_back_to_chart_default() {
        let s = Series::new(vec![1.0, 2.0], vec![1.0, 2.0]);
        let out = render_scatter(&[s], &small_opts().color("green"));
        assert!(out.contains("\x1b[32m"));

        let s = Series::new(vec![1.0, 2.0], vec![1.0, 2.0]).color(Color::Red);
        let out = render_scatter(&[s], &small_opts().color("green"));
        assert!(out.contains("\x1b[31m"));
        assert!(!out.contains("\x1b[32m"));
    }

    #[test]
    fn degenerate_range_collapses_to_origin_column() {
        // all x equal: everything maps to column 0
        let s = Series::new(vec![3.0, 3.0], vec![1.0, 2.0]).marker('x');
        let out = render_scatter(&[s], &small_opts());
        for row in out.lines().filter(|r| r.contains('x')) {
            assert_eq!(row.chars().nth(6), Some('x'));
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let s = vec![Series::new(vec![1.0, 4.0, 2.0], vec![2.0, 8.0, 3.0])];
        let opts = small_opts().title("t").xlabel("x");
        assert_eq!(render_line(&s, &opts), render_line(&s, &opts));
    }
}
