//! Up-front validation of API definition documents
//!
//! The whole document is walked before any rendering happens and every
//! missing or mistyped field is collected, so a broken definition is reported
//! in one pass instead of failing on the first lookup.
//!
//! Names are deliberately not checked for C identifier legality or
//! uniqueness; whatever the definition says is emitted verbatim.

pub mod definition;
pub mod error;

pub use definition::{DefinitionValidator, ValidationContext};
pub use error::{ValidationError, ValidationErrors, Violation};

/// Validate a parsed definition document, collecting every problem
///
/// # Examples
///
/// ```rust
/// use capigen_core::validation::validate_definition;
/// use serde_json::json;
///
/// let doc = json!({
///     "header": "out/api.h",
///     "functions": [{"name": "vsdk_init", "description": "Initialize.", "return_type": "int"}]
/// });
/// assert!(validate_definition(&doc).is_ok());
///
/// let errors = validate_definition(&json!({"functions": [{}]})).unwrap_err();
/// assert_eq!(errors.len(), 4);
/// ```
pub fn validate_definition(document: &serde_json::Value) -> Result<(), ValidationErrors> {
    DefinitionValidator::new().validate(document)
}
