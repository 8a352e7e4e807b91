//! Export result types

use std::path::PathBuf;

/// Result of an artifact export
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub source: PathBuf,
    /// Absolute destination path inside the workspace root
    pub dest: PathBuf,
    pub bytes_copied: u64,
}
