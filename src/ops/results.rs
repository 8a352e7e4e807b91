//! Operation result types
//!
//! Defines result structures returned by the core filesystem operations.

use std::path::PathBuf;

/// What kind of entry a remove operation deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovedKind {
    File,
    Directory,
}

/// Result of a remove operation
#[derive(Debug, Clone)]
pub struct RemoveResult {
    pub path: PathBuf,
    pub kind: RemovedKind,
}

/// Result of a create_folder operation
#[derive(Debug, Clone)]
pub struct CreateFolderResult {
    pub path: PathBuf,
    /// False when the directory already existed (idempotent no-op)
    pub created: bool,
}

/// Result of a rename operation
#[derive(Debug, Clone)]
pub struct RenameResult {
    pub from: PathBuf,
    pub to: PathBuf,
}
