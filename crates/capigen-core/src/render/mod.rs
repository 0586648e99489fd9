//! Rendering of the header and Markdown artifacts
//!
//! Both emitters are pure functions of the model and their options; neither
//! touches the filesystem and neither depends on the other. Output is
//! deterministic: the same model and options always produce the same bytes.

pub mod header;
pub mod markdown;
pub mod options;

pub use header::{guard_token, render_header};
pub use markdown::render_markdown;
pub use options::{DocOptions, HeaderOptions, RenderOptions};

use crate::model::{ApiModel, FunctionDef};
use std::path::PathBuf;
use tracing::debug;

/// A generated file and where it should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

/// Everything produced by one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The C header, always produced
    pub header: Artifact,
    /// The Markdown reference, produced only when `doc_output` is set
    pub doc: Option<Artifact>,
}

/// Render every artifact the model asks for
pub fn generate(model: &ApiModel, options: &RenderOptions) -> Generated {
    let header = Artifact {
        path: model.header.clone(),
        contents: render_header(model, &options.header),
    };
    debug!(path = %header.path.display(), bytes = header.contents.len(), "Rendered header");

    let doc = model.doc_output.as_ref().map(|path| {
        let contents = render_markdown(model, &options.doc);
        debug!(path = %path.display(), bytes = contents.len(), "Rendered Markdown reference");
        Artifact {
            path: path.clone(),
            contents,
        }
    });

    Generated { header, doc }
}

/// The C prototype of a function, e.g. `int vsdk_init(int flags);`
///
/// An empty parameter list renders as `()`, never `(void)`.
pub fn prototype(func: &FunctionDef) -> String {
    let params = func
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} {}({});", func.return_type, func.name, params)
}
