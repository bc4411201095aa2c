//! Log levels for CLI output

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    /// Progress and results
    Normal,
    /// Progress, results and input details
    Verbose,
}

impl LogLevel {
    /// Pick the level from the global `--quiet`/`--verbose` flags; quiet wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Whether a message requiring `required` is shown at this level
    pub fn permits(self, required: LogLevel) -> bool {
        match required {
            LogLevel::Quiet => true,
            LogLevel::Normal => self != LogLevel::Quiet,
            LogLevel::Verbose => self == LogLevel::Verbose,
        }
    }
}

/// Print `msg` to stdout if `level` permits `required`
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        println!("{msg}");
    }
}
