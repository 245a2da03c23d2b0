//! Conversion options and configuration.

/// Options for converting a document.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Terminator written after every output line
    pub line_ending: LineEnding,

    /// Collect conversion statistics
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output line terminator.
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    /// Enable or disable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

/// Line terminator used when writing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix newline (`\n`)
    #[default]
    Lf,
    /// Windows newline (`\r\n`)
    CrLf,
}

impl LineEnding {
    /// The terminator as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}
