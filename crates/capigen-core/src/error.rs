//! Error types for the capigen core library
//!
//! Every failure is fatal to a generation run; the variants carry enough
//! context (paths, formats, the full list of schema problems) for the CLI to
//! print a single useful diagnostic.

use crate::validation::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for capigen operations
#[derive(Error, Debug)]
pub enum Error {
    /// The API definition could not be read
    #[error("Failed to read API definition {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The API definition is not well-formed JSON/YAML
    #[error("Failed to parse {} as {format}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    /// The document parsed but does not describe a valid API model
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The validated document could not be mapped onto the model types
    #[error("Failed to build API model: {message}")]
    Deserialize { message: String },

    /// A generated artifact could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a parse error for the given input
    pub fn parse(path: impl Into<PathBuf>, format: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            format,
            message: message.to_string(),
        }
    }
}
