//! Console logging
//!
//! appman prints plain lines to stdout/stderr with a quiet/verbose knob,
//! passed explicitly to every component - there is no global logger state.

/// Verbosity-aware console logger.
///
/// `--quiet` drops info and debug output (errors are still reported);
/// `--verbose` enables debug output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    quiet: bool,
    verbose: bool,
}

impl Logger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Normal progress output, suppressed by `--quiet`
    pub fn info(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", msg.as_ref());
        }
    }

    /// Detail output, shown only with `--verbose`
    pub fn debug(&self, msg: impl AsRef<str>) {
        if self.verbose && !self.quiet {
            println!("{}", msg.as_ref());
        }
    }

    /// Error output, always reported on stderr
    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!("{}", msg.as_ref());
    }
}
