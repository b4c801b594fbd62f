use std::fs;
use std::path::Path;

use tracing::info;

use crate::vat::checkout::error::{Result, ToolError};

/// Writes already rendered markup to `path`, replacing any existing file.
pub fn write_html(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| ToolError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = html.len(), "wrote document");
    Ok(())
}

/// Creates the output directory and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ToolError::OutputWriteFailure {
        path: dir.to_path_buf(),
        source,
    })
}
