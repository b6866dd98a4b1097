//! Shared frame-composition helpers.
//!
//! Every chart builds an ordered `Vec<String>` of lines and joins them with
//! newlines at the very end; the sink appends the single trailing newline.

/// Centre `text` in a field of `width`, space-padded on both sides.
///
/// Matches the original renderer's centring exactly (including the trailing
/// pad and the odd-margin tie-break), so frames stay byte-identical.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }
    let marg = width - len;
    let left = marg / 2 + (marg & width & 1);
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', marg - left));
    out
}

/// Right-justify `text` in a field of `width`.
#[must_use]
pub fn right_justify(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', width - len));
    out.push_str(text);
    out
}

/// Left-justify then hard-truncate `text` to exactly `width` columns.
#[must_use]
pub fn left_justify_clipped(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

/// Title block: one blank line, the centred title, one blank line.
pub fn push_title(lines: &mut Vec<String>, title: Option<&str>, width: usize) {
    if let Some(t) = title {
        lines.push(String::new());
        lines.push(center(t, width));
        lines.push(String::new());
    }
}

/// Footer label: one blank line, then the centred label.
pub fn push_xlabel(lines: &mut Vec<String>, label: Option<&str>, width: usize) {
    if let Some(l) = label {
        lines.push(String::new());
        lines.push(center(l, width));
    }
}

/// Raw numeric value the way the original prints it (`10`, `2.5`, `-0.75`).
#[inline]
#[must_use]
pub fn format_value(v: f64) -> String {
    format!("{v}")
}

/// Join composed lines into the final text block.
#[inline]
#[must_use]
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

// --- Tests ---
