//! Centralised error types used across the crate.
//!
//! Bad chart *input* (mismatched labels, empty data) is not an error here:
//! per contract it renders as a literal message in place of the chart and
//! the call still succeeds.  Only I/O and CSV ingest faults propagate.

use std::{error::Error, fmt, io};

use crate::core::data::ParseCsvError;

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum GraphError {
    Io(io::Error),
    Csv(ParseCsvError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Io(e) => write!(f, "{e}"),
            GraphError::Csv(e) => write!(f, "{e}"),
        }
    }
}
impl Error for GraphError {}

// automatic conversions
impl From<io::Error> for GraphError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for GraphError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
