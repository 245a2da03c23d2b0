//! LaTeX to Markdown rewriting pipeline.
//!
//! The [`Rewriter`] runs three ordered stages over a [`Document`]:
//!
//! 1. [`filter_preamble`] drops document-setup directives.
//! 2. [`structural_pass`] rewrites comments, lists, tables and figures,
//!    changing the number of lines.
//! 3. [`inline_pass`] rewrites bracket commands and escapes line by line.
//!
//! All literals the stages match on are in [`rules`].

mod inline;
mod preamble;
pub mod rules;
mod structure;

pub use inline::{inline_pass, replace_escapes, rewrite_line};
pub use preamble::filter_preamble;
pub use structure::{structural_pass, table_row};

use crate::error::Result;
use crate::model::Document;
use crate::stats::ConversionStats;

/// Convert a LaTeX document to Markdown.
pub fn to_markdown(doc: &Document) -> Result<Document> {
    Rewriter::new().rewrite(doc)
}

/// Convert a LaTeX document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document) -> Result<(Document, ConversionStats)> {
    Rewriter::new().rewrite_with_stats(doc)
}

/// The three-stage LaTeX to Markdown rewriter.
#[derive(Debug, Default)]
pub struct Rewriter {
    stats: ConversionStats,
}

impl Rewriter {
    /// Create a new rewriter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite a document to Markdown.
    pub fn rewrite(self, doc: &Document) -> Result<Document> {
        let (markdown, _) = self.rewrite_with_stats(doc)?;
        Ok(markdown)
    }

    /// Rewrite a document to Markdown, returning the collected statistics.
    pub fn rewrite_with_stats(mut self, doc: &Document) -> Result<(Document, ConversionStats)> {
        self.stats.input_lines = doc.len();

        let lines = filter_preamble(doc.source_lines(), &mut self.stats);
        let lines = structural_pass(&lines, &mut self.stats)?;
        let lines = inline_pass(lines, &mut self.stats)?;

        self.stats.output_lines = lines.len();
        log::debug!("rewrite: {}", self.stats.summary());
        Ok((Document::from(lines), self.stats))
    }
}
