//! tex2md CLI - LaTeX to Markdown converter

mod common;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use common::{exit_with_error, init_logging, Ending};
use tex2md::{convert_file, ConvertOptions};

#[derive(Parser)]
#[command(name = "tex2md")]
#[command(version)]
#[command(about = "Convert a LaTeX document to Markdown", long_about = None)]
struct Cli {
    /// Path to a LaTeX file
    #[arg(long, value_name = "FILE")]
    src: PathBuf,

    /// Path to the output Markdown file (overwritten)
    #[arg(long, value_name = "FILE")]
    dst: PathBuf,

    /// Line terminator written after each output line
    #[arg(long, value_enum, default_value = "lf", env = "TEX2MD_LINE_ENDING")]
    line_ending: Ending,

    /// Print a conversion summary
    #[arg(long)]
    stats: bool,

    /// Print conversion statistics as JSON
    #[arg(long, conflicts_with = "stats")]
    stats_json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        exit_with_error(&*e);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::new()
        .with_line_ending(cli.line_ending.into())
        .with_stats(cli.stats || cli.stats_json);

    let result = convert_file(&cli.src, &cli.dst, &options)?;
    log::info!("converted {} ({} bytes)", cli.src.display(), result.content_len());

    if cli.stats_json {
        println!("{}", result.stats.to_json()?);
    } else {
        report_saved(&cli.dst);
        if cli.stats {
            println!("{} {}", "Stats:".cyan().bold(), result.stats.summary());
        }
    }

    Ok(())
}

fn report_saved(path: &Path) {
    println!("{} {}", "Saved to".green(), path.display());
}
