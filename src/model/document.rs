//! Document-level types.

use super::SourceLine;
use crate::error::{Error, Result};
use crate::options::LineEnding;
use std::fs;
use std::path::{Path, PathBuf};

/// A LaTeX or Markdown document held as trimmed lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Lines in document order, without terminators
    pub lines: Vec<String>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines, trimming surrounding whitespace from each.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text)
                .map(|line| line.trim().to_string())
                .collect(),
        }
    }

    /// Build a document from already separated lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a UTF-8 source file.
    ///
    /// Fails with [`Error::MissingSourceFile`] when the path does not exist.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_home(path.as_ref());
        if !path.exists() {
            return Err(Error::MissingSourceFile(path));
        }
        let text = fs::read_to_string(&path)?;
        let doc = Self::from_text(&text);
        log::debug!("read {} lines from {}", doc.len(), path.display());
        Ok(doc)
    }

    /// Write the document, replacing any existing file.
    pub fn write<P: AsRef<Path>>(&self, path: P, ending: LineEnding) -> Result<()> {
        let path = expand_home(path.as_ref());
        fs::write(&path, self.to_text(ending))?;
        log::debug!("wrote {} lines to {}", self.len(), path.display());
        Ok(())
    }

    /// Serialise with every line followed by `ending`, including the last.
    pub fn to_text(&self, ending: LineEnding) -> String {
        let terminator = ending.as_str();
        let mut out = String::with_capacity(
            self.lines.iter().map(|l| l.len() + terminator.len()).sum(),
        );
        for line in &self.lines {
            out.push_str(line);
            out.push_str(terminator);
        }
        out
    }

    /// Number the lines from 1 for diagnostics.
    pub fn source_lines(&self) -> Vec<SourceLine> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, text)| SourceLine::new(idx + 1, text.as_str()))
            .collect()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<SourceLine>> for Document {
    fn from(lines: Vec<SourceLine>) -> Self {
        Self {
            lines: lines.into_iter().map(|line| line.text).collect(),
        }
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(idx) = rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..idx];
        let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + width..];
        Some(line)
    })
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or with no resolvable home directory, are
/// returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    let home_var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    match std::env::var_os(home_var) {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
