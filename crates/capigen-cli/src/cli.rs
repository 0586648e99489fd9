//! Command-line interface argument parsing
//!
//! The tool takes exactly one positional argument. Anything else is a usage
//! error reported on stdout with exit status 1, before any file is touched.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// One-line usage message printed on argument errors
pub const USAGE: &str = "Usage: capigen <API_DEFINITION>";

/// Flags clap answers itself when given as the only argument
const INFO_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Generate a C header and Markdown reference from an API definition
///
/// The definition names the header path (`header`), an optional Markdown
/// output path (`doc_output`), optional `types` and the exported `functions`.
#[derive(Parser, Debug)]
#[command(name = "capigen", version, about, long_about = None)]
pub struct Cli {
    /// Path to the API definition file (JSON, or YAML by extension)
    #[arg(value_name = "API_DEFINITION", allow_hyphen_values = true)]
    pub definition: PathBuf,
}

/// Outcome of argument parsing
#[derive(Debug)]
pub enum ParsedArgs {
    /// Arguments were valid
    Run(Cli),
    /// `--help` or `--version` was requested; clap prints and exits
    Info(clap::Error),
    /// Wrong number of arguments or an unknown flag
    Usage,
}

impl Cli {
    /// Parse the process arguments
    pub fn parse_args() -> ParsedArgs {
        Self::parse_from_args(std::env::args_os())
    }

    /// Parse an explicit argument list (first item is the binary name)
    ///
    /// The count is checked on the raw list, so `--` is an argument like any
    /// other. The single argument is always a path unless it is one of the
    /// help or version flags.
    pub fn parse_from_args<I, T>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [bin, arg] = args.as_slice() else {
            return ParsedArgs::Usage;
        };

        if INFO_FLAGS.iter().any(|flag| arg == flag) {
            return match Self::try_parse_from([bin, arg]) {
                Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                    ParsedArgs::Info(e)
                }
                _ => ParsedArgs::Usage,
            };
        }
        if arg == "--" {
            return ParsedArgs::Usage;
        }

        // After the escape clap takes the argument verbatim, leading hyphen included
        match Self::try_parse_from([bin.as_os_str(), OsStr::new("--"), arg.as_os_str()]) {
            Ok(cli) => ParsedArgs::Run(cli),
            Err(_) => ParsedArgs::Usage,
        }
    }
}
