//! Structural pass: rewrites multi-line constructs.
//!
//! This is the only stage that changes the number of lines. It reads a
//! borrowed input slice with a cursor and appends to a fresh output vector,
//! so deletions and insertions never shift positions still to be read.
//!
//! | Construct | Output |
//! |---|---|
//! | `% comment` line | removed |
//! | `\begin{enumerate}` ... `\end{enumerate}` | one `- ` line per `\item ` |
//! | `\begin{table}` ... `\end{table}` | Markdown table with alignment row |
//! | `\begin{figure}` ... `\end{figure}` | removed |

use super::rules::{
    alignment_row, is_comment, BEGIN_ANY, BEGIN_ENUMERATE, BEGIN_FIGURE, BEGIN_TABLE, BULLET,
    CELL_SEP, COLUMN_SEP, END_ANY, END_ENUMERATE, END_FIGURE, ITEM, ROW_END, TABLE_ESCAPE,
};
use crate::error::{Error, Result};
use crate::model::SourceLine;
use crate::stats::ConversionStats;

/// Run the structural pass over `input`.
pub fn structural_pass(
    input: &[SourceLine],
    stats: &mut ConversionStats,
) -> Result<Vec<SourceLine>> {
    StructuralPass::new(input, stats).run()
}

/// Cursor state for one structural pass.
struct StructuralPass<'a, 's> {
    input: &'a [SourceLine],
    cursor: usize,
    output: Vec<SourceLine>,
    stats: &'s mut ConversionStats,
}

impl<'a, 's> StructuralPass<'a, 's> {
    fn new(input: &'a [SourceLine], stats: &'s mut ConversionStats) -> Self {
        Self {
            input,
            cursor: 0,
            output: Vec::with_capacity(input.len()),
            stats,
        }
    }

    fn run(mut self) -> Result<Vec<SourceLine>> {
        let input = self.input;
        while let Some(line) = input.get(self.cursor) {
            if is_comment(&line.text) {
                self.stats.comments_removed += 1;
                self.cursor += 1;
            } else if line.starts_with(BEGIN_ENUMERATE) {
                self.convert_enumerate()?;
            } else if line.starts_with(BEGIN_TABLE) {
                self.convert_table()?;
            } else if line.starts_with(BEGIN_FIGURE) {
                self.remove_figure()?;
            } else {
                self.output.push(line.clone());
                self.cursor += 1;
            }
        }

        log::debug!(
            "structural pass: {} lines -> {} lines",
            input.len(),
            self.output.len()
        );
        Ok(self.output)
    }

    /// Next unread line, or an error naming the environment left open.
    fn expect_line(&self, env: &'static str, begin: usize) -> Result<&'a SourceLine> {
        self.input
            .get(self.cursor)
            .ok_or(Error::UnterminatedEnvironment { env, line: begin })
    }

    /// Skip consecutive lines starting with `prefix`.
    fn skip_while_prefixed(&mut self, prefix: &str) {
        while self
            .input
            .get(self.cursor)
            .is_some_and(|line| line.starts_with(prefix))
        {
            self.cursor += 1;
        }
    }

    fn convert_enumerate(&mut self) -> Result<()> {
        let begin = self.input[self.cursor].number;
        self.cursor += 1;

        let mut items = 0;
        loop {
            let line = self.expect_line("enumerate", begin)?;
            self.cursor += 1;
            if line.starts_with(END_ENUMERATE) {
                break;
            }

            let rest = line
                .text
                .strip_prefix(ITEM)
                .ok_or_else(|| Error::MalformedEnumerate {
                    line: line.number,
                    text: line.text.clone(),
                })?;
            self.output
                .push(SourceLine::new(line.number, format!("{}{}", BULLET, rest)));
            items += 1;
        }

        self.stats.lists += 1;
        self.stats.list_items += items;
        log::debug!("line {}: enumerate with {} items", begin, items);
        Ok(())
    }

    fn convert_table(&mut self) -> Result<()> {
        let begin = self.input[self.cursor].number;
        // \begin{table} itself plus \begin{center}, \begin{tabular}{...}, ...
        self.skip_while_prefixed(BEGIN_ANY);

        let mut rows = 0;
        loop {
            let line = self.expect_line("table", begin)?;
            if line.starts_with(END_ANY) {
                break;
            }

            let (row, num_cols) = table_row(line)?;
            self.output.push(SourceLine::new(line.number, row));
            rows += 1;
            if rows == 1 {
                self.output
                    .push(SourceLine::new(line.number, alignment_row(num_cols)));
            }
            self.cursor += 1;
        }

        // \end{tabular}, \end{center}, \end{table}, ...
        self.skip_while_prefixed(END_ANY);

        self.stats.tables += 1;
        self.stats.table_rows += rows;
        log::debug!("line {}: table with {} rows", begin, rows);
        Ok(())
    }

    fn remove_figure(&mut self) -> Result<()> {
        let begin = self.input[self.cursor].number;
        loop {
            let line = self.expect_line("figure", begin)?;
            self.cursor += 1;
            if line.starts_with(END_FIGURE) {
                break;
            }
        }

        self.stats.figures_removed += 1;
        log::debug!("line {}: figure removed", begin);
        Ok(())
    }
}

/// Convert one LaTeX tabular row into a Markdown row.
///
/// Returns the row and its column count (one more than the number of
/// column separators).
pub fn table_row(line: &SourceLine) -> Result<(String, usize)> {
    if line.text.contains(TABLE_ESCAPE) {
        return Err(Error::UnsupportedTableEscape {
            line: line.number,
            text: line.text.clone(),
        });
    }

    let stripped = line.text.replace(ROW_END, "");
    let num_cols = 1 + stripped.matches(COLUMN_SEP).count();
    let cells = stripped.trim().replace(COLUMN_SEP, &CELL_SEP.to_string());
    Ok((format!("{} {} {}", CELL_SEP, cells, CELL_SEP), num_cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    fn run(lines: &[&str]) -> Result<Vec<String>> {
        let doc = Document::from_lines(lines.iter().copied());
        let mut stats = ConversionStats::new();
        let out = structural_pass(&doc.source_lines(), &mut stats)?;
        Ok(out.into_iter().map(|l| l.text).collect())
    }

    #[test]
    fn test_comments_removed() {
        let out = run(&["% header", "text", "%", "more % not a comment"]).unwrap();
        assert_eq!(out, vec!["text", "more % not a comment"]);
    }

    #[test]
    fn test_enumerate() {
        let out = run(&[
            "before",
            "\\begin{enumerate}[label=(\\alph*)]",
            "\\item first",
            "\\item second \\textbf{bold}",
            "\\item third",
            "\\end{enumerate}",
            "after",
        ])
        .unwrap();
        assert_eq!(
            out,
            vec![
                "before",
                "- first",
                "- second \\textbf{bold}",
                "- third",
                "after"
            ]
        );
    }

    #[test]
    fn test_enumerate_empty() {
        let out = run(&["\\begin{enumerate}", "\\end{enumerate}"]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_enumerate_malformed() {
        let err = run(&["\\begin{enumerate}", "\\item ok", "stray", "\\end{enumerate}"])
            .unwrap_err();
        match err {
            Error::MalformedEnumerate { line, text } => {
                assert_eq!(line, 3);
                assert_eq!(text, "stray");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_enumerate_bare_item_is_malformed() {
        let err = run(&["\\begin{enumerate}", "\\item", "\\end{enumerate}"]).unwrap_err();
        assert!(matches!(err, Error::MalformedEnumerate { .. }));
    }

    #[test]
    fn test_enumerate_unterminated() {
        let err = run(&["\\begin{enumerate}", "\\item a"]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnterminatedEnvironment {
                env: "enumerate",
                line: 1
            }
        ));
    }

    #[test]
    fn test_table() {
        let out = run(&[
            "\\begin{table}[h]",
            "\\begin{center}",
            "\\begin{tabular}{|c|c|}",
            "A & B \\\\",
            "1 & 2 \\\\",
            "\\end{tabular}",
            "\\end{center}",
            "\\end{table}",
            "after",
        ])
        .unwrap();
        assert_eq!(out, vec!["| A | B |", "|---|---|", "| 1 | 2 |", "after"]);
    }

    #[test]
    fn test_table_single_column() {
        let out = run(&["\\begin{table}", "only \\\\", "\\end{table}"]).unwrap();
        assert_eq!(out, vec!["| only |", "|---|"]);
    }

    #[test]
    fn test_table_without_rows() {
        let out = run(&["\\begin{table}", "\\end{table}", "after"]).unwrap();
        assert_eq!(out, vec!["after"]);
    }

    #[test]
    fn test_table_at_end_of_document() {
        let out = run(&["\\begin{table}", "a & b & c", "\\end{table}"]).unwrap();
        assert_eq!(out, vec!["| a | b | c |", "|---|---|---|"]);
    }

    #[test]
    fn test_table_escaped_ampersand() {
        let err = run(&["\\begin{table}", "R\\&D & 2 \\\\", "\\end{table}"]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedTableEscape { line: 2, .. }
        ));
    }

    #[test]
    fn test_table_unterminated() {
        let err = run(&["\\begin{table}", "a & b"]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnterminatedEnvironment { env: "table", .. }
        ));
    }

    #[test]
    fn test_figure_removed() {
        let out = run(&[
            "keep",
            "\\begin{figure}[ht]",
            "\\centering",
            "\\includegraphics{plot.png}",
            "\\caption{A plot}",
            "\\end{figure}",
            "also keep",
        ])
        .unwrap();
        assert_eq!(out, vec!["keep", "also keep"]);
    }

    #[test]
    fn test_figure_unterminated() {
        let err = run(&["\\begin{figure}", "\\centering"]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnterminatedEnvironment { env: "figure", .. }
        ));
    }

    #[test]
    fn test_stats_counted() {
        let doc = Document::from_lines([
            "% c",
            "\\begin{enumerate}",
            "\\item a",
            "\\item b",
            "\\end{enumerate}",
            "\\begin{figure}",
            "\\end{figure}",
        ]);
        let mut stats = ConversionStats::new();
        structural_pass(&doc.source_lines(), &mut stats).unwrap();
        assert_eq!(stats.comments_removed, 1);
        assert_eq!(stats.lists, 1);
        assert_eq!(stats.list_items, 2);
        assert_eq!(stats.figures_removed, 1);
    }

    #[test]
    fn test_table_row_column_count() {
        let (row, cols) = table_row(&SourceLine::new(1, "x & y & z \\\\")).unwrap();
        assert_eq!(row, "| x | y | z |");
        assert_eq!(cols, 3);
    }
}
