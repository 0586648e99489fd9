//! Writing generated artifacts to disk

use crate::error::{Error, Result};
use crate::render::Artifact;
use std::fs;
use tracing::{debug, instrument};

/// Write an artifact, creating missing parent directories
///
/// Any existing file at the target path is overwritten. The write is not
/// atomic; an interrupted run may leave a partial file behind.
#[instrument(skip_all, fields(path = %artifact.path.display()))]
pub fn write_artifact(artifact: &Artifact) -> Result<()> {
    let to_write_error = |source| Error::Write {
        path: artifact.path.clone(),
        source,
    };

    if let Some(parent) = artifact.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(dir = %parent.display(), "Creating output directory");
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }
    }

    fs::write(&artifact.path, &artifact.contents).map_err(to_write_error)?;
    debug!(bytes = artifact.contents.len(), "Wrote artifact");
    Ok(())
}
