//! Preamble filter: drops document-setup directives.

use super::rules::is_preamble;
use crate::model::SourceLine;
use crate::stats::ConversionStats;

/// Remove every line that starts with a preamble prefix, preserving order.
pub fn filter_preamble(lines: Vec<SourceLine>, stats: &mut ConversionStats) -> Vec<SourceLine> {
    let before = lines.len();
    let kept: Vec<SourceLine> = lines
        .into_iter()
        .filter(|line| !is_preamble(&line.text))
        .collect();

    stats.preamble_lines += before - kept.len();
    log::debug!(
        "preamble filter: dropped {} of {} lines",
        before - kept.len(),
        before
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn test_filter_preamble() {
        let doc = Document::from_lines([
            "\\documentclass{article}",
            "\\usepackage{hyperref}",
            "\\setlength{\\parindent}{0pt}",
            "\\newcommand{\\R}{\\mathbb{R}}",
            "\\begin{document}",
            "Hello",
            "\\hline",
            "\\newpage",
            "World",
            "\\end{document}",
        ]);
        let mut stats = ConversionStats::new();
        let kept = filter_preamble(doc.source_lines(), &mut stats);

        let texts: Vec<&str> = kept.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "World"]);
        assert_eq!(kept[1].number, 9);
        assert_eq!(stats.preamble_lines, 8);
    }

    #[test]
    fn test_filter_preamble_prefix_only() {
        let doc = Document::from_lines(["see \\usepackage docs", "\\usepackageX"]);
        let mut stats = ConversionStats::new();
        let kept = filter_preamble(doc.source_lines(), &mut stats);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "see \\usepackage docs");
    }
}
