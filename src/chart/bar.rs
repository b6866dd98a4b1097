//! Horizontal bar chart.

use crate::{
    chart::ERR_INVALID_INPUT,
    core::{
        color::colorize,
        constants::{BAR_GUTTER, FILL_CHAR},
        error::GraphError,
        options::BarOptions,
    },
    render::{
        frame::{format_value, join_lines, push_title, push_xlabel, right_justify},
        sink::Sink,
    },
};

/// Compose a bar chart frame.
///
/// One line per bar: the label left-padded to the widest label, ` | `, the
/// bar glyphs (colour-wrapped), a space and the raw value.  Bar lengths come
/// from `scale = (max_width - max_label_len - 5) / max_value` with integer
/// truncation, so a value twice another draws (about) twice the glyphs.
#[must_use]
pub fn render_bar<S: AsRef<str>>(labels: &[S], values: &[f64], opts: &BarOptions) -> String {
    if labels.is_empty() || values.is_empty() || labels.len() != values.len() {
        return ERR_INVALID_INPUT.to_owned();
    }

    let mut lines = Vec::new();
    push_title(&mut lines, opts.title.as_deref(), opts.max_width);

    let max_label_len = labels
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // may go negative when labels outgrow the width; bars just collapse
    #[allow(clippy::cast_possible_wrap)]
    let avail = opts.max_width as i64 - max_label_len as i64 - BAR_GUTTER as i64;
    #[allow(clippy::cast_precision_loss)]
    let scale = avail as f64 / max_value;

    if let Some(ylabel) = opts.ylabel.as_deref() {
        lines.push(right_justify(ylabel, max_label_len));
    }

    for (label, &value) in labels.iter().zip(values) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar_len = ((value * scale) as i64).max(0) as usize;
        let bar: String = std::iter::repeat_n(FILL_CHAR, bar_len).collect();
        let mut row = label.as_ref().to_owned();
        let pad = max_label_len.saturating_sub(label.as_ref().chars().count());
        row.extend(std::iter::repeat_n(' ', pad));
        row.push_str(" | ");
        row.push_str(&colorize(opts.color, &bar));
        row.push(' ');
        row.push_str(&format_value(value));
        lines.push(row);
    }

    push_xlabel(&mut lines, opts.xlabel.as_deref(), opts.max_width);

    join_lines(&lines)
}

/// Render a bar chart to stdout, or to `opts.output_file` when set.
pub fn bar<S: AsRef<str>>(
    labels: &[S],
    values: &[f64],
    opts: &BarOptions,
) -> Result<(), GraphError> {
    let text = render_bar(labels, values, opts);
    Sink::for_path(opts.output_file.as_deref()).emit(&text)?;
    Ok(())
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_len(line: &str) -> usize {
        line.chars().filter(|&c| c == FILL_CHAR).count()
    }

    #[test]
    fn doubled_value_doubles_the_bar() {
        let out = render_bar(&["A", "B"], &[10.0, 20.0], &BarOptions::default());
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(glyph_len(rows[1]), 2 * glyph_len(rows[0]));
    }

    #[test]
    fn longest_bar_fills_the_budget() {
        let opts = BarOptions::default();
        let out = render_bar(&["A", "B"], &[10.0, 20.0], &opts);
        let widest = out.lines().map(glyph_len).max().unwrap();
        // max_width 80, label width 1, gutter 5
        assert_eq!(widest, 74);
    }

    #[test]
    fn rows_carry_label_value_and_separator() {
        let out = render_bar(&["apples", "fig"], &[3.0, 1.5], &BarOptions::default());
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows[0].starts_with("apples | "));
        assert!(rows[0].ends_with(" 3"));
        assert!(rows[1].starts_with("fig    | "));
        assert!(rows[1].ends_with(" 1.5"));
    }

    #[test]
    fn mismatched_input_is_a_literal_error() {
        let opts = BarOptions::default().title("never shown");
        assert_eq!(render_bar(&["A"], &[1.0, 2.0], &opts), ERR_INVALID_INPUT);
        assert_eq!(
            render_bar::<&str>(&[], &[], &BarOptions::default()),
            ERR_INVALID_INPUT
        );
    }

    #[test]
    fn title_and_labels_frame_the_bars() {
        let opts = BarOptions::default()
            .title("Fruit")
            .xlabel("Count")
            .ylabel("Kind");
        let out = render_bar(&["A"], &[1.0], &opts);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0], "");
        assert_eq!(rows[1].trim(), "Fruit");
        assert_eq!(rows[2], "");
        // right-justified to the label column, which is narrower here
        assert_eq!(rows[3], "Kind");
        assert_eq!(rows[rows.len() - 2], "");
        assert_eq!(rows[rows.len() - 1].trim(), "Count");
    }

    #[test]
    fn color_wraps_only_the_glyphs() {
        let opts = BarOptions::default().color("red");
        let out = render_bar(&["A"], &[1.0], &opts);
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("\x1b[0m"));
        assert!(!out.starts_with('\x1b'));
    }
}
