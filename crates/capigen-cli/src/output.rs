//! Console output for human readers
//!
//! Status lines go to stdout; diagnostics go through `tracing` on stderr.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use tracing::debug;

/// Render a status line, green on color terminals
pub fn format_notice(message: &str, use_color: bool) -> String {
    if use_color {
        message.green().to_string()
    } else {
        message.to_string()
    }
}

/// Whether stdout should be colored given the config flag
///
/// Respects `NO_COLOR` and only colors real terminals.
pub fn should_color(config_allows: bool) -> bool {
    config_allows && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

/// Output writer for status lines
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a writer on stdout
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self::with_writer(use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message unless running quiet
    pub fn success(&mut self, message: &str) -> Result<()> {
        debug!(quiet = self.quiet, "Output: {}", message);

        if self.quiet {
            return Ok(());
        }
        let line = format_notice(message, self.use_color);
        self.writeln(&line)
    }
}
