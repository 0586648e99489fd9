//! Configuration management for the CLI
//!
//! Settings are loaded from, in order of precedence:
//! - The file named by `CAPIGEN_CONFIG`
//! - `.capigen.toml`, `.capigen.yaml` or `.capigen.json` in the current directory
//! - `config.{toml,yaml,json}` under the user config directory (`capigen/`)
//! - Built-in defaults
//!
//! Config discovery never adds command-line arguments; the CLI surface stays
//! a single positional path.

use crate::error::{Error, Result};
use capigen_core::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "CAPIGEN_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header and Markdown rendering options
    pub render: RenderOptions,

    /// Console output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output when stdout is a terminal
    pub color: bool,

    /// Suppress the per-artifact status lines
    pub quiet: bool,
}

/// Logging configuration as written in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,

    /// Include file and line numbers
    pub source_location: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            quiet: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            source_location: false,
        }
    }
}

/// Config file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_str_with_format(&content, ConfigFormat::from_path(path))
    }

    fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Load configuration from `CAPIGEN_CONFIG` or the default locations
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::discover(&Self::default_config_paths())),
        }
    }

    /// First loadable config among `candidates`, or defaults
    ///
    /// A candidate that exists but fails to load is reported and skipped.
    pub fn discover(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::default()
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".capigen.toml"),
            PathBuf::from(".capigen.yaml"),
            PathBuf::from(".capigen.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let capigen_dir = config_dir.join("capigen");
            paths.push(capigen_dir.join("config.toml"));
            paths.push(capigen_dir.join("config.yaml"));
            paths.push(capigen_dir.join("config.json"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.render.header.extern_c);
        assert!(config.output.color);
        assert!(!config.output.quiet);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_toml_config() {
        let config = Config::from_str_with_format(
            r#"
[render.header]
extern_c = false
includes = ["stdint.h"]

[render.doc]
title = "VSDK Reference"
toc = true

[output]
quiet = true
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert!(!config.render.header.extern_c);
        assert_eq!(config.render.header.includes, vec!["stdint.h".to_string()]);
        assert_eq!(config.render.doc.title.as_deref(), Some("VSDK Reference"));
        assert!(config.render.doc.toc);
        assert!(config.output.quiet);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_yaml_and_json_config() {
        let yaml = Config::from_str_with_format(
            "logging:\n  level: debug\n  format: json\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(yaml.logging.level, "debug");
        assert_eq!(yaml.logging.format, "json");

        let json = Config::from_str_with_format(
            r#"{"render": {"doc": {"intro": ""}}}"#,
            ConfigFormat::Json,
        )
        .unwrap();
        assert_eq!(json.render.doc.intro.as_deref(), Some(""));
    }

    #[test]
    fn test_discover_skips_broken_candidates() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join(".capigen.toml");
        let good = dir.path().join(".capigen.json");
        fs::write(&broken, "this is = = not toml").unwrap();
        fs::write(&good, r#"{"output": {"color": false}}"#).unwrap();

        let config = Config::discover(&[dir.path().join("absent.yaml"), broken, good]);
        assert!(!config.output.color);
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::discover(&[dir.path().join(".capigen.toml")]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file_missing_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
