//! Capigen Core - C header and Markdown reference generation from one API definition
//!
//! This crate turns a declarative description of a C API (types, function
//! signatures, parameter metadata and prose) into two derived artifacts:
//!
//! - **Header**: an include-guarded C header with Doxygen-style comment blocks,
//!   optionally wrapped in an `extern "C"` linkage block
//! - **Reference document**: a Markdown file with one section per type and per
//!   function, in input order
//!
//! # Main Components
//!
//! - **Model**: serde types for the API definition document
//! - **Validation**: up-front schema checks that report every problem at once
//! - **Loader**: reads JSON or YAML definitions from disk
//! - **Render**: the pure header and Markdown emitters
//! - **Writer**: writes artifacts, creating missing directories
//!
//! # Example
//!
//! ```no_run
//! use capigen_core::{generate, load_model, write_artifact, RenderOptions, Result};
//!
//! fn example() -> Result<()> {
//!     let model = load_model("api/definitions.json")?;
//!     let generated = generate(&model, &RenderOptions::default());
//!     write_artifact(&generated.header)?;
//!     if let Some(doc) = &generated.doc {
//!         write_artifact(doc)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod validation;
pub mod writer;

pub use error::{Error, Result};
pub use loader::{load_model, parse_model, InputFormat};
pub use model::{ApiModel, FunctionDef, ParamDef, TypeDef};
pub use render::{
    generate, guard_token, prototype, render_header, render_markdown, Artifact, DocOptions,
    Generated, HeaderOptions, RenderOptions,
};
pub use validation::{validate_definition, ValidationError, ValidationErrors, Violation};
pub use writer::write_artifact;
