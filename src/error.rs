//! Error types for the tex2md library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tex2md operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a conversion or cleaning run.
///
/// Every variant raised from inside a document carries the 1-based line
/// number of the offending source line.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Statistics could not be serialised.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source path does not exist.
    #[error("could not find file '{}'", .0.display())]
    MissingSourceFile(PathBuf),

    /// A line inside an enumerate environment is not an `\item `.
    #[error("line {line}: expected '\\item ' inside enumerate, found '{text}'")]
    MalformedEnumerate { line: usize, text: String },

    /// A table row contains an escaped ampersand.
    #[error("line {line}: parsing tables with \\& is not implemented: '{text}'")]
    UnsupportedTableEscape { line: usize, text: String },

    /// A bracket command has no closing brace on its line.
    #[error("line {line}: unterminated {command}{{...}} in '{text}'")]
    UnterminatedBracketCommand {
        line: usize,
        command: &'static str,
        text: String,
    },

    /// The link part of a hyperlink is not followed by `{`.
    #[error("line {line}: expected '{{' after hyperlink target in '{text}'")]
    MalformedHyperlink { line: usize, text: String },

    /// An environment is still open when the document ends.
    #[error("line {line}: \\begin{{{env}}} is never closed")]
    UnterminatedEnvironment { env: &'static str, line: usize },
}

impl Error {
    /// Source line the error points at, if it came from document content.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io(_) | Error::Json(_) | Error::MissingSourceFile(_) => None,
            Error::MalformedEnumerate { line, .. }
            | Error::UnsupportedTableEscape { line, .. }
            | Error::UnterminatedBracketCommand { line, .. }
            | Error::MalformedHyperlink { line, .. }
            | Error::UnterminatedEnvironment { line, .. } => Some(*line),
        }
    }
}
