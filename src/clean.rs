//! Trailing-comment cleaner for LaTeX sources.
//!
//! Unlike the converter, which only drops whole-line comments, the cleaner
//! also cuts inline comments. Only the first `%` on a line is examined:
//!
//! - at the start of the line, the line is deleted;
//! - as the last character, the line is kept (a line-continuation marker);
//! - preceded by `\`, it is a literal percent and the line is kept;
//! - otherwise the line is cut just before it.
//!
//! `\%` is never rewritten.

use crate::model::Document;
use crate::rewrite::rules::COMMENT;
use crate::stats::CleanStats;

/// What the cleaner does with a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    /// Leave the line as it is
    Keep,
    /// Drop the whole line
    Delete,
    /// Cut the line at the given byte offset
    Truncate(usize),
}

/// Decide how to treat the first `%` of a line.
pub fn classify(line: &str) -> CommentAction {
    let Some(idx) = line.find(COMMENT) else {
        return CommentAction::Keep;
    };
    if idx == 0 {
        CommentAction::Delete
    } else if idx == line.len() - 1 || line.as_bytes()[idx - 1] == b'\\' {
        CommentAction::Keep
    } else {
        CommentAction::Truncate(idx)
    }
}

/// Strip the comment from one line; `None` when the line is deleted.
pub fn strip_comment(line: &str) -> Option<&str> {
    match classify(line) {
        CommentAction::Keep => Some(line),
        CommentAction::Delete => None,
        CommentAction::Truncate(idx) => Some(&line[..idx]),
    }
}

/// Remove comments from every line of a document.
pub fn clean(doc: &Document) -> Document {
    clean_with_stats(doc).0
}

/// Remove comments from every line, returning the collected statistics.
pub fn clean_with_stats(doc: &Document) -> (Document, CleanStats) {
    let mut stats = CleanStats::new();
    stats.input_lines = doc.len();

    let mut lines = Vec::with_capacity(doc.len());
    for line in &doc.lines {
        match classify(line) {
            CommentAction::Keep => lines.push(line.clone()),
            CommentAction::Delete => stats.lines_removed += 1,
            CommentAction::Truncate(idx) => {
                stats.lines_truncated += 1;
                lines.push(line[..idx].to_string());
            }
        }
    }

    log::debug!(
        "clean: {} lines, {} removed, {} truncated",
        stats.input_lines,
        stats.lines_removed,
        stats.lines_truncated
    );
    (Document { lines }, stats)
}
