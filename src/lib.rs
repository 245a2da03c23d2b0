//! # tex2md
//!
//! Line-oriented LaTeX to Markdown rewriting for lecture notes and papers.
//!
//! This is not a LaTeX parser. It recognises a fixed set of constructs by
//! their textual prefix and rewrites them in place: sections, comments,
//! `enumerate` lists, tables, figures, bold text, hyperlinks and a few
//! escape sequences. Anything else passes through untouched, and input it
//! cannot handle is rejected with an [`Error`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use tex2md::{convert_file, ConvertOptions};
//!
//! fn main() -> tex2md::Result<()> {
//!     let result = convert_file("notes.tex", "notes.md", &ConvertOptions::new().with_stats(true))?;
//!     println!("{}", result.stats.summary());
//!     Ok(())
//! }
//! ```
//!
//! ```
//! let markdown = tex2md::convert_str("\\section{Intro}\n\\textbf{Hi} \\& bye\n").unwrap();
//! assert_eq!(markdown, "# Intro\n**Hi** & bye\n");
//! ```

pub mod clean;
pub mod error;
pub mod model;
pub mod options;
pub mod rewrite;
pub mod stats;

// Re-export commonly used types
pub use clean::{clean, clean_with_stats, strip_comment, CommentAction};
pub use error::{Error, Result};
pub use model::{Document, SourceLine};
pub use options::{ConvertOptions, LineEnding};
pub use rewrite::Rewriter;
pub use stats::{CleanStats, ConversionStats, ConvertResult};

use std::path::Path;

/// Convert LaTeX source text to Markdown text.
///
/// Every output line is terminated with `\n`.
pub fn convert_str(text: &str) -> Result<String> {
    let doc = Document::from_text(text);
    let markdown = rewrite::to_markdown(&doc)?;
    Ok(markdown.to_text(LineEnding::Lf))
}

/// Strip comments from LaTeX source text.
pub fn clean_str(text: &str) -> String {
    clean(&Document::from_text(text)).to_text(LineEnding::Lf)
}

/// Convert a LaTeX file to Markdown.
///
/// # Example
///
/// ```no_run
/// let markdown = tex2md::to_markdown("lecture.tex").unwrap();
/// std::fs::write("lecture.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = Document::read(path)?;
    let markdown = rewrite::to_markdown(&doc)?;
    Ok(markdown.to_text(LineEnding::Lf))
}

/// Convert the LaTeX file at `src` and write the Markdown to `dst`.
///
/// `dst` is overwritten if it exists. Nothing is written when conversion
/// fails.
pub fn convert_file<P, Q>(src: P, dst: Q, options: &ConvertOptions) -> Result<ConvertResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let doc = Document::read(src)?;
    let (markdown, stats) = Rewriter::new().rewrite_with_stats(&doc)?;
    markdown.write(dst, options.line_ending)?;

    let stats = if options.collect_stats {
        stats
    } else {
        ConversionStats::default()
    };
    Ok(ConvertResult::new(
        markdown.to_text(options.line_ending),
        stats,
    ))
}

/// Strip comments from the LaTeX file at `src` and write the result to `dst`,
/// ending every line with `ending`.
pub fn clean_file<P, Q>(src: P, dst: Q, ending: LineEnding) -> Result<CleanStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let doc = Document::read(src)?;
    let (cleaned, stats) = clean_with_stats(&doc);
    cleaned.write(dst, ending)?;
    Ok(stats)
}
