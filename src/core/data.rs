//! Memory-efficient CSV loaders with zero-allocation float parsing.
//!
//! Three row shapes feed the chart commands:
//! * `x,y`        -> scatter / line series
//! * `label,value` -> bar / pie categories
//! * `value[,..]`  -> histogram samples (first field only)

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount(usize),
    BadFloat { field: &'static str, text: String },
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount(n) => {
                write!(f, "line {}: expected 2 columns, got {}", self.line, n)
            }
            ParseErrorKind::BadFloat { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 (unicode minus) to ASCII '-' in place.
#[inline]
fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseCsvError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            field,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                field,
                text: "NaN".into(),
            },
        })
    }
}

/// Split a row at the first comma: `(left, Some(right))` or `(row, None)`.
#[inline]
fn split2(buf: &[u8]) -> (&[u8], Option<&[u8]>) {
    match buf.iter().position(|&b| b == b',') {
        Some(p) => (trim(&buf[..p]), Some(trim(&buf[p + 1..]))),
        None => (trim(buf), None),
    }
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Drive `row` over every data row of `src`.
///
/// Handles CR/LF trimming, unicode-minus normalisation, blank/`#` comment
/// skipping and one-line header sniffing (a non-numeric first field on the
/// first row is treated as a header, except for the labelled shapes where
/// the caller opts out via `numeric_first`).
fn for_each_row<R: Read>(
    src: R,
    numeric_first: bool,
    mut row: impl FnMut(&[u8], usize) -> Result<(), ParseCsvError>,
) -> Result<(), ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            if numeric_first {
                let (first, _) = split2(&buf);
                if lexical_core::parse::<f64>(first).is_err() {
                    continue;
                }
            }
        }

        row(&buf, line_no)?;
    }
    Ok(())
}

/// Read `x,y` rows into two parallel coordinate vectors.
pub fn read_xy<R: Read>(src: R) -> Result<(Vec<f64>, Vec<f64>), ParseCsvError> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for_each_row(src, true, |buf, line| {
        let (a, b) = split2(buf);
        let Some(b) = b else {
            return Err(ParseCsvError {
                line,
                kind: ParseErrorKind::BadColumnCount(1),
            });
        };
        xs.push(parse_f64(a, line, "x")?);
        ys.push(parse_f64(b, line, "y")?);
        Ok(())
    })?;
    Ok((xs, ys))
}

/// Read `label,value` rows (bar and pie input).
pub fn read_labeled<R: Read>(src: R) -> Result<(Vec<String>, Vec<f64>), ParseCsvError> {
    let mut labels = Vec::new();
    let mut values = Vec::new();
    let mut first = true;
    for_each_row(src, false, |buf, line| {
        let (a, b) = split2(buf);
        let Some(b) = b else {
            return Err(ParseCsvError {
                line,
                kind: ParseErrorKind::BadColumnCount(1),
            });
        };
        // header sniff on the value column (the label column is free text)
        if first {
            first = false;
            if lexical_core::parse::<f64>(b).is_err() {
                return Ok(());
            }
        }
        labels.push(String::from_utf8_lossy(a).into_owned());
        values.push(parse_f64(b, line, "value")?);
        Ok(())
    })?;
    Ok((labels, values))
}

/// Read one sample per row (first field), for histograms.
pub fn read_values<R: Read>(src: R) -> Result<Vec<f64>, ParseCsvError> {
    let mut vals = Vec::new();
    for_each_row(src, true, |buf, line| {
        let (a, _) = split2(buf);
        vals.push(parse_f64(a, line, "value")?);
        Ok(())
    })?;
    Ok(vals)
}

fn open(path: &str) -> Result<std::fs::File, ParseCsvError> {
    std::fs::File::open(path).map_err(|e| ParseCsvError {
        line: 0,
        kind: ParseErrorKind::Io(e),
    })
}

/// `-` reads stdin, anything else is a file path.
pub fn read_xy_from_path(path: &str) -> Result<(Vec<f64>, Vec<f64>), ParseCsvError> {
    if path == "-" {
        read_xy(std::io::stdin())
    } else {
        read_xy(open(path)?)
    }
}

pub fn read_labeled_from_path(path: &str) -> Result<(Vec<String>, Vec<f64>), ParseCsvError> {
    if path == "-" {
        read_labeled(std::io::stdin())
    } else {
        read_labeled(open(path)?)
    }
}

pub fn read_values_from_path(path: &str) -> Result<Vec<f64>, ParseCsvError> {
    if path == "-" {
        read_values(std::io::stdin())
    } else {
        read_values(open(path)?)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_rows_parse_with_header_and_comments() {
        let csv = b"x,y\n# comment\n1,2\n\n3.5,\xe2\x88\x924\n" as &[u8];
        let (xs, ys) = read_xy(csv).unwrap();
        assert_eq!(xs, vec![1.0, 3.5]);
        assert_eq!(ys, vec![2.0, -4.0]);
    }

    #[test]
    fn labeled_rows_keep_text_labels() {
        let csv = b"apples, 10\npears,2.5\n" as &[u8];
        let (labels, values) = read_labeled(csv).unwrap();
        assert_eq!(labels, vec!["apples", "pears"]);
        assert_eq!(values, vec![10.0, 2.5]);
    }

    #[test]
    fn labeled_header_row_is_skipped() {
        let csv = b"category,count\na,1\nb,2\n" as &[u8];
        let (labels, values) = read_labeled(csv).unwrap();
        assert_eq!(labels, vec!["a", "b"]);
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn single_column_takes_first_field() {
        let csv = b"1\n2,ignored\n3\n" as &[u8];
        assert_eq!(read_values(csv).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn missing_column_is_reported_with_line() {
        let csv = b"1,2\njust-one\n" as &[u8];
        let err = read_xy(csv).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadColumnCount(1)));
    }

    #[test]
    fn bad_float_is_reported() {
        let err = read_xy(b"1,zebra\n" as &[u8]).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { .. }));
    }
}
