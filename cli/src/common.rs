//! Helpers shared by the tex2md and texclean binaries.

use clap::ValueEnum;
use colored::Colorize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Ending {
    /// Unix newlines
    Lf,
    /// Windows newlines
    Crlf,
}

impl From<Ending> for tex2md::LineEnding {
    fn from(ending: Ending) -> Self {
        match ending {
            Ending::Lf => tex2md::LineEnding::Lf,
            Ending::Crlf => tex2md::LineEnding::CrLf,
        }
    }
}

/// Initialise logging; `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Print an error and exit with status 1.
pub fn exit_with_error(err: &dyn std::error::Error) -> ! {
    eprintln!("{}: {}", "Error".red().bold(), err);
    std::process::exit(1);
}
