//! Output destinations for a composed frame.
//!
//! One blocking whole-buffer write per render; a file sink produces bytes
//! identical to the stdout sink (both end with a single trailing newline).

use std::{
    fs,
    io::{self, Write, stdout},
    path::{Path, PathBuf},
};

/// Where a finished text block goes.
#[derive(Clone, Debug, Default)]
pub enum Sink {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Sink {
    /// A file sink when a path was supplied, stdout otherwise.
    #[must_use]
    pub fn for_path(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_path_buf()))
    }

    /// Emit `text` plus a trailing newline, overwriting any existing file.
    pub fn emit(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut out = stdout().lock();
                out.write_all(text.as_bytes())?;
                out.write_all(b"\n")?;
                out.flush()
            }
            Self::File(path) => fs::write(path, format!("{text}\n")),
        }
    }
}

// --- Tests ---
