//! Artifact export
//!
//! Copies an artifact file into the workspace root under a chosen filename
//! and surfaces a download link through the injected presenter. Unlike
//! rename, export overwrites an existing destination: publishing the latest
//! artifact under a stable name is the whole point of the operation.

pub mod copy;
pub mod link;
pub mod results;

pub use copy::copy_file_contents;
pub use link::{ArtifactLink, LinkPresenter, TerminalLinkPresenter};
pub use results::ExportResult;

use log::info;
use std::fs;
use std::path::Path;

use crate::error::OpsError;

/// Exports an artifact file into the workspace root
///
/// Verifies the source is an existing regular file, makes sure the workspace
/// root directory exists, copies the bytes, then hands the presenter a link
/// labeled with `dest_filename` alone. Returns the absolute destination path
/// and byte count on success.
pub fn export_artifact(
    workspace_root: &Path,
    source: &Path,
    dest_filename: &str,
    buffer_size: usize,
    presenter: &dyn LinkPresenter,
) -> Result<ExportResult, OpsError> {
    if !source.exists() {
        return Err(OpsError::NotFound(source.display().to_string()));
    }

    if !source.is_file() {
        return Err(OpsError::NotAFile(source.display().to_string()));
    }

    fs::create_dir_all(workspace_root)?;

    let dest = workspace_root.join(dest_filename);
    let bytes_copied = copy_file_contents(source, &dest, buffer_size)?;

    // Absolute path so the link works regardless of the session's cwd
    let dest = dest.canonicalize()?;

    info!(
        "Exported {} to {} ({} bytes)",
        source.display(),
        dest.display(),
        bytes_copied
    );

    presenter.present(&ArtifactLink {
        display_name: dest_filename.to_string(),
        target: dest.clone(),
    });

    Ok(ExportResult {
        source: source.to_path_buf(),
        dest,
        bytes_copied,
    })
}
