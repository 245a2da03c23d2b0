//! Static rule tables for the LaTeX to Markdown rewriter.
//!
//! Every literal the passes match on lives here so each rule can be
//! inspected and tested on its own.

/// Lines starting with any of these are document setup and are dropped.
pub const PREAMBLE_PREFIXES: &[&str] = &[
    "\\documentclass",
    "\\usepackage",
    "\\setlength",
    "\\newcommand",
    "\\begin{document}",
    "\\end{document}",
    "\\hline",
    "\\newpage",
];

/// Marks a whole-line comment when it is the first non-blank character.
pub const COMMENT: char = '%';

pub const BEGIN_ENUMERATE: &str = "\\begin{enumerate}";
pub const END_ENUMERATE: &str = "\\end{enumerate}";
/// Required prefix of every line inside an enumerate environment.
pub const ITEM: &str = "\\item ";
/// Markdown marker written in place of [`ITEM`].
pub const BULLET: &str = "- ";

pub const BEGIN_TABLE: &str = "\\begin{table}";
pub const BEGIN_FIGURE: &str = "\\begin{figure}";
pub const END_FIGURE: &str = "\\end{figure}";
/// Opener of any environment; runs of these after `\begin{table}` are skipped.
pub const BEGIN_ANY: &str = "\\begin{";
/// Closer of any environment; the first one ends a table body.
pub const END_ANY: &str = "\\end{";

/// LaTeX row terminator, removed from table rows.
pub const ROW_END: &str = "\\\\";
/// LaTeX column separator.
pub const COLUMN_SEP: char = '&';
/// Markdown column separator.
pub const CELL_SEP: char = '|';
/// Escaped ampersand; not supported inside tables.
pub const TABLE_ESCAPE: &str = "\\&";
/// One column of the Markdown header separator row.
pub const ALIGN_CELL: &str = "---|";

/// Markdown shape produced by a bracket command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `# text`
    Heading,
    /// `**text**`
    Bold,
    /// `[text](link)`, from a two-argument command
    Link,
}

/// A single-line bracket command and its rewrite.
#[derive(Debug, Clone, Copy)]
pub struct BracketCommand {
    /// Command name as written in LaTeX, e.g. `\section`
    pub name: &'static str,
    /// Literal opening token searched for, e.g. `\section{`
    pub token: &'static str,
    /// Output shape
    pub kind: CommandKind,
}

/// Bracket commands in the order they are applied to each line.
pub const BRACKET_COMMANDS: &[BracketCommand] = &[
    BracketCommand {
        name: "\\section",
        token: "\\section{",
        kind: CommandKind::Heading,
    },
    BracketCommand {
        name: "\\subsection",
        token: "\\subsection{",
        kind: CommandKind::Bold,
    },
    BracketCommand {
        name: "\\textbf",
        token: "\\textbf{",
        kind: CommandKind::Bold,
    },
    BracketCommand {
        name: "\\hyperlink",
        token: "\\hyperlink{",
        kind: CommandKind::Link,
    },
];

/// Literal substitutions applied after the bracket commands, in order.
pub const ESCAPES: &[(&str, &str)] = &[("\\&", "&"), ("$\\sim$", "~"), ("\\#", "#")];

/// Check whether a line is a document-setup directive.
pub fn is_preamble(line: &str) -> bool {
    let line = line.trim();
    PREAMBLE_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Check whether a line is a whole-line comment.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT)
}

/// Build the Markdown alignment row for `num_cols` columns.
pub fn alignment_row(num_cols: usize) -> String {
    let mut row = String::with_capacity(1 + ALIGN_CELL.len() * num_cols);
    row.push(CELL_SEP);
    row.push_str(&ALIGN_CELL.repeat(num_cols));
    row
}
