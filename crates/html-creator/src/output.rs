//! Output sinks for finished documents.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::{HtmlCreatorError, Result};

/// Where a finished document is written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    /// Standard output, followed by a newline
    #[default]
    Stdout,
    /// Entire contents of a file, replacing whatever was there
    File(PathBuf),
}

impl Output {
    /// Create a file output. An empty path means standard output.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() {
            Output::Stdout
        } else {
            Output::File(path)
        }
    }

    /// The file path, if this is a file output
    pub fn path(&self) -> Option<&Path> {
        match self {
            Output::Stdout => None,
            Output::File(path) => Some(path),
        }
    }

    /// Write a complete rendered document to this sink.
    ///
    /// The string is written in one call. A file handle is opened, written and
    /// closed inside this function on every path.
    pub fn write(&self, html: &str) -> Result<()> {
        let written = match self {
            Output::File(path) if !path.as_os_str().is_empty() => fs::write(path, html),
            _ => write_line(io::stdout().lock(), html),
        };

        written.map_err(|source| HtmlCreatorError::SinkWrite {
            target: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("stdout"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write `html` followed by a newline, then flush
fn write_line<W: Write>(mut writer: W, html: &str) -> io::Result<()> {
    writer.write_all(html.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
