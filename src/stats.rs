//! Conversion result with statistics.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Result of converting a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResult {
    /// The rendered Markdown, one terminated line per output line
    pub content: String,

    /// Conversion statistics (all zero unless collection was enabled)
    pub stats: ConversionStats,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, stats: ConversionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counters collected while rewriting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Lines read from the source
    pub input_lines: usize,

    /// Lines in the Markdown output
    pub output_lines: usize,

    /// Document-setup lines dropped by the preamble filter
    pub preamble_lines: usize,

    /// Whole-line comments removed
    pub comments_removed: usize,

    /// Enumerate environments converted
    pub lists: usize,

    /// Items across all converted lists
    pub list_items: usize,

    /// Table environments converted
    pub tables: usize,

    /// Data rows across all converted tables
    pub table_rows: usize,

    /// Figure environments dropped
    pub figures_removed: usize,

    /// `\section` commands rewritten to headings
    pub headings: usize,

    /// `\subsection` and `\textbf` commands rewritten to bold
    pub bold: usize,

    /// `\hyperlink` commands rewritten to links
    pub links: usize,

    /// Escape sequences replaced
    pub escapes: usize,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialise the counters as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} lines ({} headings, {} lists, {} tables, {} figures removed, {} comments removed)",
            self.input_lines,
            self.output_lines,
            self.headings,
            self.lists,
            self.tables,
            self.figures_removed,
            self.comments_removed
        )
    }
}

/// Counters collected by the comment cleaner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    /// Lines read from the source
    pub input_lines: usize,

    /// Lines deleted because they started with `%`
    pub lines_removed: usize,

    /// Lines cut at a trailing comment
    pub lines_truncated: usize,
}

impl CleanStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}
