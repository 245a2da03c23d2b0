//! Document model for line-oriented LaTeX rewriting.
//!
//! A document is nothing more than an ordered list of trimmed text lines.
//! Lines carry no structure of their own; every pass re-derives what a line
//! is from its textual prefix.

mod document;
mod line;

pub use document::{expand_home, Document};
pub use line::SourceLine;
