//! texclean CLI - strip comments from a LaTeX file

#[path = "../common.rs"]
mod common;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use common::{exit_with_error, init_logging, Ending};
use tex2md::clean_file;

#[derive(Parser)]
#[command(name = "texclean")]
#[command(version)]
#[command(about = "Remove comments from a LaTeX file", long_about = None)]
struct Cli {
    /// Path to a LaTeX file
    #[arg(long, value_name = "FILE", default_value = "src.tex")]
    src: PathBuf,

    /// Path to the cleaned output file (overwritten)
    #[arg(long, value_name = "FILE", default_value = "dst.tex")]
    dst: PathBuf,

    /// Line terminator written after each output line
    #[arg(long, value_enum, default_value = "lf", env = "TEX2MD_LINE_ENDING")]
    line_ending: Ending,

    /// Print how many lines were removed or truncated
    #[arg(long)]
    stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match clean_file(&cli.src, &cli.dst, cli.line_ending.into()) {
        Ok(stats) => {
            println!("{} {}", "Saved to".green(), cli.dst.display());
            if cli.stats {
                println!(
                    "{} {} lines, {} removed, {} truncated",
                    "Stats:".cyan().bold(),
                    stats.input_lines,
                    stats.lines_removed,
                    stats.lines_truncated
                );
            }
        }
        Err(e) => exit_with_error(&e),
    }
}
