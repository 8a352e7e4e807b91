//! Shell command definitions
//!
//! Defines the data structures used to represent commands, their status,
//! and results.

/// Represents a workbench command parsed from a line of input.
///
/// Commands that require operands store them as `String` variants.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Delete a file or directory tree
    Remove(String),
    /// Create a directory and any missing parents
    CreateFolder(String),
    /// Move a path, refusing to overwrite the destination
    Rename { from: String, to: String },
    /// Copy an artifact into the workspace root and print a link
    Export { source: String, name: Option<String> },
    /// List a directory (the workspace root when no operand is given)
    List(Option<String>),
    Help,
    Quit,
    /// Unknown verb, or a known verb with missing operands
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseSession,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}
