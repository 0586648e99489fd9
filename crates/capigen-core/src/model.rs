//! API definition model
//!
//! These types mirror the definition document one-to-one. The model is read
//! once per run and never mutated; ordering of `types`, `functions` and each
//! function's `params` is preserved into both generated artifacts.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Root of an API definition document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModel {
    /// Output path of the generated header
    pub header: PathBuf,

    /// Output path of the Markdown reference; `None` skips doc generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_output: Option<PathBuf>,

    /// Display name of the library, used in the document title and intro
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    /// Type declarations emitted before the functions
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub types: Vec<TypeDef>,

    /// Exported functions, in declaration order
    pub functions: Vec<FunctionDef>,
}

/// A type declaration emitted verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub description: String,
    /// Literal declaration text, e.g. `typedef struct vsdk_ctx vsdk_ctx_t`
    #[serde(rename = "type")]
    pub ty: String,
}

/// An exported function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub return_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: Vec<ParamDef>,
}

/// A single function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

impl ApiModel {
    /// Whether a documentation artifact was requested
    pub fn wants_doc(&self) -> bool {
        self.doc_output.is_some()
    }
}

impl FunctionDef {
    /// Text for the `@return` tag and the Returns line: the return
    /// description when present, otherwise the bare return type
    pub fn return_text(&self) -> &str {
        self.return_description
            .as_deref()
            .unwrap_or(self.return_type.as_str())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_model_deserializes() {
        let model: ApiModel = serde_json::from_value(json!({
            "header": "out/api.h",
            "functions": []
        }))
        .unwrap();

        assert_eq!(model.header, PathBuf::from("out/api.h"));
        assert!(model.doc_output.is_none());
        assert!(model.types.is_empty());
        assert!(!model.wants_doc());
    }

    #[test]
    fn test_null_types_and_params_become_empty() {
        let model: ApiModel = serde_json::from_value(json!({
            "header": "api.h",
            "types": null,
            "functions": [{
                "name": "vsdk_version",
                "description": "Library version.",
                "return_type": "const char*",
                "params": null
            }]
        }))
        .unwrap();

        assert!(model.types.is_empty());
        assert!(model.functions[0].params.is_empty());
    }

    #[test]
    fn test_type_field_is_renamed() {
        let param: ParamDef = serde_json::from_value(json!({
            "name": "flags",
            "type": "int",
            "description": "Init flags."
        }))
        .unwrap();
        assert_eq!(param.ty, "int");

        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["type"], "int");
    }

    #[test]
    fn test_return_text_falls_back_to_type() {
        let mut func = FunctionDef {
            name: "vsdk_init".to_string(),
            description: "Initialize.".to_string(),
            return_type: "int".to_string(),
            return_description: None,
            params: Vec::new(),
        };
        assert_eq!(func.return_text(), "int");

        func.return_description = Some("0 on success.".to_string());
        assert_eq!(func.return_text(), "0 on success.");
    }
}
