//! Numbered lines flowing through the rewrite passes.

/// A line of text tagged with the 1-based source line it came from.
///
/// The number is only used for diagnostics. Lines synthesised by a pass
/// (such as a table alignment row) borrow the number of the line that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the source file
    pub number: usize,

    /// Trimmed line content
    pub text: String,
}

impl SourceLine {
    /// Create a numbered line.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Check whether the line text starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }
}
