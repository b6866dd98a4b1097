//! Histogram of equal-width bins, drawn as vertical columns.

use crate::{
    chart::{ERR_EMPTY_DATA, ERR_IDENTICAL_DATA, ERR_NO_BIN_HITS},
    core::{color::colorize, error::GraphError, options::HistOptions},
    render::{
        axis::format_tick,
        frame::{join_lines, left_justify_clipped, push_title, push_xlabel, right_justify},
        sink::Sink,
    },
};

/// Equal-width binning: every interval is half-open `[e_i, e_{i+1})` except
/// the last, which also takes the maximum value.
#[must_use]
pub fn bin_counts(data: &[f64], bins: usize, min: f64, max: f64) -> Vec<usize> {
    if bins == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let bin_range = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];

    for &x in data {
        if x == max {
            counts[bins - 1] += 1;
            continue;
        }
        for i in 0..bins {
            #[allow(clippy::cast_precision_loss)]
            let lo = min + i as f64 * bin_range;
            let hi = min + (i + 1) as f64 * bin_range;
            if lo <= x && x < hi {
                counts[i] += 1;
                break;
            }
        }
    }
    counts
}

/// Compose a histogram frame.
///
/// Rows are scanned top-down: a bin's column shows its fill glyph on row `h`
/// when `count * scale > h`, with `scale = height / max_count`.  Below the
/// bars come a dashed separator and one row of bin-edge labels, each
/// left-justified then clipped to `width / bins` columns.
#[must_use]
pub fn render_hist(data: &[f64], opts: &HistOptions) -> String {
    let mut lines = Vec::new();
    push_title(&mut lines, opts.title.as_deref(), opts.width);

    if data.is_empty() {
        lines.push(ERR_EMPTY_DATA.to_owned());
        return join_lines(&lines);
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        lines.push(ERR_IDENTICAL_DATA.to_owned());
        return join_lines(&lines);
    }

    let bins = opts.bins;
    let counts = bin_counts(data, bins, min, max);
    let max_count = counts.iter().copied().max().unwrap_or(0);
    if max_count == 0 {
        lines.push(ERR_NO_BIN_HITS.to_owned());
        return join_lines(&lines);
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = opts.height as f64 / max_count as f64;
    let col_width = opts.width / bins;
    let fill = colorize(opts.color, &opts.fill.to_string());

    for h in (0..opts.height).rev() {
        #[allow(clippy::cast_precision_loss)]
        let threshold = h as f64;
        let mut row = String::new();
        for &count in &counts {
            #[allow(clippy::cast_precision_loss)]
            let bar_height = count as f64 * scale;
            if bar_height > threshold {
                row.push_str(&fill);
                row.extend(std::iter::repeat_n(' ', col_width.saturating_sub(1)));
            } else {
                row.extend(std::iter::repeat_n(' ', col_width));
            }
        }
        lines.push(row);
    }

    lines.push("-".repeat(opts.width));

    #[allow(clippy::cast_precision_loss)]
    let bin_range = (max - min) / bins as f64;
    let mut label_row = String::new();
    for i in 0..bins {
        #[allow(clippy::cast_precision_loss)]
        let edge = min + i as f64 * bin_range;
        label_row.push_str(&left_justify_clipped(&format_tick(edge), col_width));
    }
    lines.push(label_row);

    push_xlabel(&mut lines, opts.xlabel.as_deref(), opts.width);
    if let Some(ylabel) = opts.ylabel.as_deref() {
        lines.push(format!("{} (count)", right_justify(ylabel, 10)));
    }
    lines.push(String::new());
    lines.push(String::new());

    join_lines(&lines)
}

/// Render a histogram to stdout.
pub fn hist(data: &[f64], opts: &HistOptions) -> Result<(), GraphError> {
    Sink::Stdout.emit(&render_hist(data, opts))?;
    Ok(())
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<f64> {
        vec![
            1.0, 1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0, 5.0, 6.0, 7.0, 7.0, 7.0, 7.0, 8.0, 9.0, 10.0,
        ]
    }

    #[test]
    fn every_sample_lands_in_exactly_one_bin() {
        let data = sample();
        let counts = bin_counts(&data, 5, 1.0, 10.0);
        assert_eq!(counts.iter().sum::<usize>(), data.len());
    }

    #[test]
    fn maximum_goes_to_the_last_bin() {
        let counts = bin_counts(&sample(), 5, 1.0, 10.0);
        // 10.0 plus 9.0 (bin [8.2, 10.0] closed on the right for the max)
        assert_eq!(counts[4], 2);
    }

    #[test]
    fn tallest_bin_reaches_the_top_row() {
        let data = sample();
        let opts = HistOptions::default().bins(5).width(40).height(8);
        let out = render_hist(&data, &opts);
        let first_bar_row = out.lines().next().unwrap();
        assert!(first_bar_row.contains('█'));
    }

    #[test]
    fn separator_and_edge_labels_follow_the_bars() {
        let opts = HistOptions::default().bins(5).width(40).height(4);
        let out = render_hist(&sample(), &opts);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[4], "-".repeat(40));
        // first edge of [1, 10] split 5 ways
        assert!(rows[5].starts_with("1.0"));
        assert!(rows[5].contains("8.2"));
    }

    #[test]
    fn empty_and_flat_data_give_literal_errors() {
        let out = render_hist(&[], &HistOptions::default());
        assert_eq!(out, ERR_EMPTY_DATA);
        let out = render_hist(&[4.0, 4.0, 4.0], &HistOptions::default().title("T"));
        assert!(out.ends_with(ERR_IDENTICAL_DATA));
        assert!(out.contains('T'));
    }

    #[test]
    fn ylabel_is_right_justified_with_count_suffix() {
        let opts = HistOptions::default().bins(2).width(20).height(3).ylabel("n");
        let out = render_hist(&[1.0, 2.0, 3.0], &opts);
        assert!(out.contains("         n (count)"));
    }

    #[test]
    fn custom_fill_char_is_used() {
        let opts = HistOptions::default().bins(2).width(10).height(2).fill('#');
        let out = render_hist(&[1.0, 2.0], &opts);
        assert!(out.contains('#'));
        assert!(!out.contains('█'));
    }
}
