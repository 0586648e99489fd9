//! Structural validator for API definition documents

use crate::validation::error::{ValidationError, ValidationErrors};
use serde_json::{Map, Value};

/// Location of the value currently being validated
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Current JSON path
    pub path: String,
}

impl ValidationContext {
    /// Context positioned at the document root
    pub fn root() -> Self {
        Self {
            path: "$".to_string(),
        }
    }

    /// Create a child context for an object key
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, path_segment.as_ref()),
        }
    }

    /// Create a child context for an array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }
}

/// Walks a definition document and collects every structural problem
#[derive(Debug, Default)]
pub struct DefinitionValidator {
    errors: Vec<ValidationError>,
}

impl DefinitionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the document, returning all problems found
    pub fn validate(mut self, document: &Value) -> Result<(), ValidationErrors> {
        let context = ValidationContext::root();

        match document.as_object() {
            Some(root) => self.validate_root(root, &context),
            None => self.wrong_type(&context, "object", document),
        }

        if !self.errors.is_empty() {
            tracing::debug!(count = self.errors.len(), "API definition failed validation");
        }
        ValidationErrors::from(self.errors).into_result()
    }

    fn validate_root(&mut self, root: &Map<String, Value>, context: &ValidationContext) {
        if let Some(header) = self.required_string(root, "header", context) {
            if header.trim().is_empty() {
                self.errors.push(ValidationError::with_violation(
                    context.child("header").path,
                    "header path must not be empty",
                    ValidationError::create_violation("non_empty", "a file path", "empty string"),
                ));
            }
        }
        self.optional_string(root, "doc_output", context);
        self.optional_string(root, "library", context);

        if let Some(types) = self.optional_array(root, "types", context) {
            let types_context = context.child("types");
            for (index, entry) in types.iter().enumerate() {
                self.validate_type_def(entry, &types_context.child_index(index));
            }
        }

        if let Some(functions) = self.required_array(root, "functions", context) {
            let functions_context = context.child("functions");
            for (index, entry) in functions.iter().enumerate() {
                self.validate_function_def(entry, &functions_context.child_index(index));
            }
        }
    }

    fn validate_type_def(&mut self, entry: &Value, context: &ValidationContext) {
        let Some(object) = self.object(entry, context) else {
            return;
        };
        for field in ["name", "description", "type"] {
            self.required_string(object, field, context);
        }
    }

    fn validate_function_def(&mut self, entry: &Value, context: &ValidationContext) {
        let Some(object) = self.object(entry, context) else {
            return;
        };
        for field in ["name", "description", "return_type"] {
            self.required_string(object, field, context);
        }
        self.optional_string(object, "return_description", context);

        if let Some(params) = self.optional_array(object, "params", context) {
            let params_context = context.child("params");
            for (index, param) in params.iter().enumerate() {
                self.validate_param_def(param, &params_context.child_index(index));
            }
        }
    }

    fn validate_param_def(&mut self, entry: &Value, context: &ValidationContext) {
        let Some(object) = self.object(entry, context) else {
            return;
        };
        for field in ["name", "type", "description"] {
            self.required_string(object, field, context);
        }
    }

    fn object<'a>(
        &mut self,
        value: &'a Value,
        context: &ValidationContext,
    ) -> Option<&'a Map<String, Value>> {
        let object = value.as_object();
        if object.is_none() {
            self.wrong_type(context, "object", value);
        }
        object
    }

    fn required_string<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        key: &str,
        context: &ValidationContext,
    ) -> Option<&'a str> {
        match object.get(key) {
            None => {
                self.missing(context, key, "string");
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(other) => {
                self.wrong_type(&context.child(key), "string", other);
                None
            }
        }
    }

    fn optional_string(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        context: &ValidationContext,
    ) {
        match object.get(key) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => self.wrong_type(&context.child(key), "string", other),
        }
    }

    fn required_array<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        key: &str,
        context: &ValidationContext,
    ) -> Option<&'a Vec<Value>> {
        match object.get(key) {
            None => {
                self.missing(context, key, "array");
                None
            }
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.wrong_type(&context.child(key), "array", other);
                None
            }
        }
    }

    fn optional_array<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        key: &str,
        context: &ValidationContext,
    ) -> Option<&'a Vec<Value>> {
        match object.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.wrong_type(&context.child(key), "array", other);
                None
            }
        }
    }

    fn missing(&mut self, context: &ValidationContext, key: &str, expected: &str) {
        self.errors.push(ValidationError::with_violation(
            context.child(key).path,
            format!("missing required field '{}'", key),
            ValidationError::create_violation("required", expected, "nothing"),
        ));
    }

    fn wrong_type(&mut self, context: &ValidationContext, expected: &str, actual: &Value) {
        self.errors.push(ValidationError::with_violation(
            context.path.clone(),
            format!("expected {}, found {}", expected, json_type_name(actual)),
            ValidationError::create_violation("type", expected, json_type_name(actual)),
        ));
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
