//! Loading API definitions from disk
//!
//! A definition is parsed into a generic document first, validated as a whole,
//! and only then mapped onto the typed model.

use crate::error::{Error, Result};
use crate::model::ApiModel;
use crate::validation::validate_definition;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Serialization format of a definition document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from a file extension; anything that is not
    /// `.yaml`/`.yml` is treated as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Read, validate and deserialize the definition at `path`
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_model(path: impl AsRef<Path>) -> Result<ApiModel> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = content.len(), "Read API definition");

    let format = InputFormat::from_path(path);
    let document = parse_document(&content, format)
        .map_err(|message| Error::parse(path, format.name(), message))?;
    model_from_document(document)
}

/// Validate and deserialize a definition held in memory
pub fn parse_model(content: &str, format: InputFormat) -> Result<ApiModel> {
    let document = parse_document(content, format)
        .map_err(|message| Error::parse("<memory>", format.name(), message))?;
    model_from_document(document)
}

fn parse_document(content: &str, format: InputFormat) -> std::result::Result<Value, String> {
    match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

fn model_from_document(document: Value) -> Result<ApiModel> {
    validate_definition(&document)?;

    let model: ApiModel = serde_json::from_value(document).map_err(|e| Error::Deserialize {
        message: e.to_string(),
    })?;
    debug!(
        types = model.types.len(),
        functions = model.functions.len(),
        doc = model.wants_doc(),
        "Loaded API model"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("api.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("api.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("api.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("api")), InputFormat::Json);
    }

    #[test]
    fn test_parse_json_model() {
        let model = parse_model(
            r#"{"header": "out/api.h", "functions": [{"name": "vsdk_init", "description": "Initialize.", "return_type": "int", "params": [{"name": "flags", "type": "int", "description": "Init flags."}]}]}"#,
            InputFormat::Json,
        )
        .unwrap();

        assert_eq!(model.header, PathBuf::from("out/api.h"));
        assert_eq!(model.functions.len(), 1);
        assert_eq!(model.functions[0].params[0].name, "flags");
    }

    #[test]
    fn test_parse_yaml_model() {
        let yaml = "\
header: include/api.h
doc_output: docs/api.md
functions:
  - name: vsdk_shutdown
    description: Release resources.
    return_type: void
    params: []
";
        let model = parse_model(yaml, InputFormat::Yaml).unwrap();
        assert_eq!(model.doc_output, Some(PathBuf::from("docs/api.md")));
        assert_eq!(model.functions[0].name, "vsdk_shutdown");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_model("{\"header\": ", InputFormat::Json).unwrap_err();
        assert!(matches!(err, Error::Parse { format: "JSON", .. }));
    }

    #[test]
    fn test_schema_problems_surface_as_validation_error() {
        let err = parse_model(r#"{"header": "api.h"}"#, InputFormat::Json).unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["$.functions"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
