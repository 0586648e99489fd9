//! Logging setup for the capigen CLI
//!
//! This module provides:
//! - Structured logging setup on stderr (stdout is reserved for status lines)
//! - Level and format selection from config and environment
//! - Performance timing spans for the generation stages

use crate::config::LoggingSettings;
use crate::error::{Error, Result};
use std::io::IsTerminal;
use tracing::{field, Span};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for everyday use
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl LogFormat {
    fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "full" => Some(Self::Full),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Build from the `[logging]` section of the config file
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let format = LogFormat::parse(&settings.format).unwrap_or_else(|| {
            eprintln!(
                "Warning: Invalid log format '{}', using compact",
                settings.format
            );
            LogFormat::Compact
        });

        Self {
            level: settings.level.clone(),
            format,
            source_location: settings.source_location,
        }
    }

    /// Apply `CAPIGEN_LOG` and `CAPIGEN_LOG_FORMAT` overrides
    ///
    /// `RUST_LOG` is honoured later by the env filter and wins over both.
    pub fn merge_with_env(&mut self) {
        self.apply_overrides(
            std::env::var("CAPIGEN_LOG").ok(),
            std::env::var("CAPIGEN_LOG_FORMAT").ok(),
        );
    }

    fn apply_overrides(&mut self, level: Option<String>, format: Option<String>) {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }

        if let Some(format) = format {
            match LogFormat::parse(&format) {
                Some(parsed) => self.format = parsed,
                None => eprintln!("Warning: Invalid log format '{}', ignoring", format),
            }
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config);
    let ansi = std::io::stderr().is_terminal();

    // Each format yields a different subscriber type, so install per branch
    let installed = match config.format {
        LogFormat::Compact => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(ansi)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .compact()
                .finish(),
        ),
        LogFormat::Full => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(ansi)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .finish(),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .json()
                .finish(),
        ),
    };
    installed.map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(config = ?config, "Logging system initialized");
    Ok(())
}

/// `RUST_LOG` when set, otherwise the configured level
fn create_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
            eprintln!(
                "Warning: Invalid log level '{}' ({}), using warn",
                config.level, e
            );
            EnvFilter::new("warn")
        })
    })
}

/// Create a span for one generation stage
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// A timer that logs its duration when finished or dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: String,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self::build(operation, None)
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self::build(operation, Some(details))
        }

        fn build(operation: &str, details: Option<&str>) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, details),
                operation: operation.to_string(),
            }
        }

        /// Get elapsed time without finishing the timer
        pub fn elapsed(&self) -> std::time::Duration {
            self.start.elapsed()
        }

        /// The span covering this stage, for entering nested work
        pub fn span(&self) -> &Span {
            &self.span
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis() as u64,
                "Operation completed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            format: "JSON".to_string(),
            source_location: true,
        };
        let config = LoggingConfig::from_settings(&settings);
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.source_location);
    }

    #[test]
    fn test_unknown_format_falls_back_to_compact() {
        let settings = LoggingSettings {
            format: "fancy".to_string(),
            ..LoggingSettings::default()
        };
        assert_eq!(LoggingConfig::from_settings(&settings).format, LogFormat::Compact);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = LoggingConfig::default();
        config.apply_overrides(Some("trace".to_string()), Some("full".to_string()));
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Full);

        config.apply_overrides(Some("  ".to_string()), Some("bogus".to_string()));
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Full);
    }

    #[test]
    fn test_second_install_reports_once() {
        let _ = init_logging(LoggingConfig::default());
        let err = init_logging(LoggingConfig::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to initialize logging: "));
        assert_eq!(message.matches("Failed to initialize logging").count(), 1);
    }

    #[test]
    fn test_timer_measures_elapsed() {
        let timer = timing::Timer::with_details("render", "header");
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.elapsed().as_millis() >= 2);
    }
}
