//! Error types
//!
//! Defines domain-specific error types for each module of the workbench.

use std::fmt;
use std::io;

/// Filesystem operation errors
///
/// Not-found and conflict cases are detected proactively before the OS call;
/// `IoError` carries whatever the platform reported after the fact.
#[derive(Debug)]
pub enum OpsError {
    NotFound(String),
    NotAFile(String),
    NotADirectory(String),
    DestinationExists(String),
    IoError(io::Error),
}

impl fmt::Display for OpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpsError::NotFound(p) => write!(f, "Path not found: {}", p),
            OpsError::NotAFile(p) => write!(f, "Not a regular file: {}", p),
            OpsError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            OpsError::DestinationExists(p) => write!(f, "Destination already exists: {}", p),
            OpsError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for OpsError {}

impl From<io::Error> for OpsError {
    fn from(error: io::Error) -> Self {
        OpsError::IoError(error)
    }
}

/// General workbench error that encompasses all error types
#[derive(Debug)]
pub enum WorkbenchError {
    Ops(OpsError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for WorkbenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkbenchError::Ops(e) => write!(f, "Operation error: {}", e),
            WorkbenchError::Config(e) => write!(f, "Configuration error: {}", e),
            WorkbenchError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for WorkbenchError {}

impl From<OpsError> for WorkbenchError {
    fn from(error: OpsError) -> Self {
        WorkbenchError::Ops(error)
    }
}

impl From<config::ConfigError> for WorkbenchError {
    fn from(error: config::ConfigError) -> Self {
        WorkbenchError::Config(error)
    }
}

impl From<io::Error> for WorkbenchError {
    fn from(error: io::Error) -> Self {
        WorkbenchError::IoError(error)
    }
}
