//! Generation pipeline: load, emit header, optionally emit the reference doc

use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use capigen_core::{generate, load_model, write_artifact, Generated};
use std::path::Path;
use tracing::{info, warn};

/// Handle a generation run for the definition at `definition`
///
/// The header is always written first; the Markdown reference follows only
/// when the definition names a `doc_output` path.
pub fn handle_generate(
    definition: &Path,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<Generated> {
    let model = {
        let timer = Timer::with_details("load", &definition.display().to_string());
        let _enter = timer.span().enter();
        load_model(definition)?
    };

    if model.functions.is_empty() {
        warn!(definition = %definition.display(), "API definition declares no functions");
    }

    let generated = {
        let timer = Timer::new("render");
        let _enter = timer.span().enter();
        generate(&model, &config.render)
    };

    {
        let header = &generated.header;
        let timer = Timer::with_details("write", &header.path.display().to_string());
        let _enter = timer.span().enter();
        write_artifact(header)?;
    }
    info!(path = %generated.header.path.display(), "Header written");
    output.success(&format!(
        "✅ Header file '{}' generated.",
        generated.header.path.display()
    ))?;

    if let Some(doc) = &generated.doc {
        {
            let timer = Timer::with_details("write", &doc.path.display().to_string());
            let _enter = timer.span().enter();
            write_artifact(doc)?;
        }
        info!(path = %doc.path.display(), "Markdown reference written");
        output.success(&format!("📄 Markdown doc '{}' generated.", doc.path.display()))?;
    }

    Ok(generated)
}
