//! Error types and handling for the CLI
//!
//! Usage errors never reach this type; they are handled in `main` before
//! anything else runs and always exit with status 1.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from capigen-core (loading, validation, writing)
    #[error(transparent)]
    Core(#[from] capigen_core::Error),

    /// IO error outside of artifact generation (config files, console)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error; 1 is reserved for usage errors
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(core) => match core {
                capigen_core::Error::Read { .. } => 3,
                capigen_core::Error::Parse { .. } => 4,
                capigen_core::Error::Validation(_) => 5,
                capigen_core::Error::Deserialize { .. } => 5,
                capigen_core::Error::Write { .. } => 6,
            },
            Self::Io(_) => 2,
            Self::Config(_) => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) => 14,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capigen_core::{ValidationError, ValidationErrors};
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_never_collide_with_usage() {
        let errors = [
            Error::from(capigen_core::Error::Read {
                path: PathBuf::from("api.json"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            }),
            Error::from(capigen_core::Error::from(ValidationErrors::from(
                ValidationError::new("$.header", "missing required field 'header'"),
            ))),
            Error::config("bad"),
            Error::other("boom"),
        ];
        for error in &errors {
            assert_ne!(error.exit_code(), 0);
            assert_ne!(error.exit_code(), 1);
        }
    }

    #[test]
    fn test_format_error_plain() {
        let formatted = format_error(&Error::config("unknown key"), false);
        assert_eq!(formatted, "Error: Configuration error: unknown key");
    }

    #[test]
    fn test_validation_problems_all_listed() {
        let errors = ValidationErrors::from(vec![
            ValidationError::new("$.header", "missing required field 'header'"),
            ValidationError::new("$.functions[0].name", "missing required field 'name'"),
        ]);
        let formatted = format_error(&Error::from(capigen_core::Error::from(errors)), false);
        assert!(formatted.starts_with("Error: Invalid API definition (2 problems):"));
        assert!(formatted.contains("1. $.header: missing required field 'header'"));
        assert!(formatted.contains("2. $.functions[0].name: missing required field 'name'"));
    }
}
