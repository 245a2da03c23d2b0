//! Inline pass: per-line bracket command and escape rewriting.

use super::rules::{BracketCommand, CommandKind, BRACKET_COMMANDS, ESCAPES};
use crate::error::{Error, Result};
use crate::model::SourceLine;
use crate::stats::ConversionStats;

/// Rewrite every line independently. The line count never changes.
pub fn inline_pass(
    lines: Vec<SourceLine>,
    stats: &mut ConversionStats,
) -> Result<Vec<SourceLine>> {
    lines
        .into_iter()
        .map(|line| {
            let text = rewrite_line(&line, stats)?;
            Ok(SourceLine::new(line.number, text))
        })
        .collect()
}

/// Apply all bracket commands, then all escape substitutions, to one line.
pub fn rewrite_line(line: &SourceLine, stats: &mut ConversionStats) -> Result<String> {
    let mut text = line.text.trim().to_string();
    for command in BRACKET_COMMANDS {
        text = rewrite_command(text, command, line.number, stats)?;
    }
    Ok(replace_escapes(text, stats))
}

/// Rewrite every occurrence of `command` in `text`.
///
/// The argument ends at the first `}` after the opening brace; nested braces
/// are not balanced, so `\textbf{a{b}c}` yields `**a{b**c}`.
fn rewrite_command(
    mut text: String,
    command: &BracketCommand,
    number: usize,
    stats: &mut ConversionStats,
) -> Result<String> {
    // Every splice shortens the line, so this terminates.
    while let Some(start) = text.find(command.token) {
        let arg_start = start + command.token.len();
        let arg_end = arg_start
            + closing_brace(&text[arg_start..])
                .ok_or_else(|| unterminated(command, number, &text))?;
        let arg = &text[arg_start..arg_end];

        let (replacement, end) = match command.kind {
            CommandKind::Heading => {
                stats.headings += 1;
                (format!("# {}", arg), arg_end + 1)
            }
            CommandKind::Bold => {
                stats.bold += 1;
                (format!("**{}**", arg), arg_end + 1)
            }
            CommandKind::Link => {
                let label_open = arg_end + 1;
                if text.as_bytes().get(label_open) != Some(&b'{') {
                    return Err(Error::MalformedHyperlink {
                        line: number,
                        text: text.clone(),
                    });
                }
                let label_start = label_open + 1;
                let label_end = label_start
                    + closing_brace(&text[label_start..])
                        .ok_or_else(|| unterminated(command, number, &text))?;
                stats.links += 1;
                (
                    format!("[{}]({})", &text[label_start..label_end], arg),
                    label_end + 1,
                )
            }
        };

        log::trace!("line {}: {} -> {}", number, &text[start..end], replacement);
        text = format!("{}{}{}", &text[..start], replacement, &text[end..]);
    }
    Ok(text)
}

fn closing_brace(s: &str) -> Option<usize> {
    s.find('}')
}

fn unterminated(command: &BracketCommand, number: usize, text: &str) -> Error {
    Error::UnterminatedBracketCommand {
        line: number,
        command: command.name,
        text: text.to_string(),
    }
}

/// Apply the fixed escape substitutions in table order.
pub fn replace_escapes(mut text: String, stats: &mut ConversionStats) -> String {
    for &(from, to) in ESCAPES {
        let count = text.matches(from).count();
        if count > 0 {
            text = text.replace(from, to);
            stats.escapes += count;
        }
    }
    text
}
