//! Command handlers for the workbench shell.
//!
//! Each handler runs one typed operation and converts its outcome into a
//! printable `CommandResult`. Errors never leave this layer: whatever the
//! operation reports, the session gets a one-line message and keeps going.

use log::info;
use std::path::Path;

use crate::config::WorkbenchConfig;
use crate::export::{LinkPresenter, export_artifact};
use crate::ops;
use crate::ops::results::RemovedKind;
use crate::shell::commands::{Command, CommandResult, CommandStatus};

/// Dispatches a parsed command to its corresponding handler.
///
/// # Arguments
///
/// * `command` - Reference to the parsed command enum.
/// * `config` - Workbench configuration (workspace root, export defaults).
/// * `presenter` - Capability used to surface artifact links.
///
/// # Returns
///
/// * `CommandResult` - Result of the command execution, including status and message.
pub fn handle_command(
    command: &Command,
    config: &WorkbenchConfig,
    presenter: &dyn LinkPresenter,
) -> CommandResult {
    match command {
        Command::Remove(path) => handle_cmd_remove(path),
        Command::CreateFolder(path) => handle_cmd_mkdir(path),
        Command::Rename { from, to } => handle_cmd_rename(from, to),
        Command::Export { source, name } => {
            handle_cmd_export(source, name.as_deref(), config, presenter)
        }
        Command::List(path) => handle_cmd_list(path.as_deref(), config),
        Command::Help => handle_cmd_help(),
        Command::Quit => handle_cmd_quit(),
        Command::Unknown(raw) => handle_cmd_unknown(raw),
    }
}

/// Handles the RM command: deletes a file or a directory tree.
fn handle_cmd_remove(path: &str) -> CommandResult {
    match ops::remove(Path::new(path)) {
        Ok(result) => {
            let message = match result.kind {
                RemovedKind::Directory => {
                    format!("Removed directory {} and all of its contents\n", path)
                }
                RemovedKind::File => format!("Removed file {}\n", path),
            };
            CommandResult {
                status: CommandStatus::Success,
                message: Some(message),
            }
        }
        Err(e) => failure(format!("Cannot remove {}: {}\n", path, e), e.to_string()),
    }
}

/// Handles the MKDIR command: creates a directory and any missing parents.
fn handle_cmd_mkdir(path: &str) -> CommandResult {
    match ops::create_folder(Path::new(path)) {
        Ok(result) => {
            let message = if result.created {
                format!("Created directory {}\n", path)
            } else {
                format!("Directory {} already exists\n", path)
            };
            CommandResult {
                status: CommandStatus::Success,
                message: Some(message),
            }
        }
        Err(e) => failure(
            format!("Cannot create directory {}: {}\n", path, e),
            e.to_string(),
        ),
    }
}

/// Handles the MV command: renames a path without overwriting the destination.
fn handle_cmd_rename(from: &str, to: &str) -> CommandResult {
    match ops::rename(Path::new(from), Path::new(to)) {
        Ok(_) => CommandResult {
            status: CommandStatus::Success,
            message: Some(format!("Renamed {} to {}\n", from, to)),
        },
        Err(e) => failure(
            format!("Cannot rename {} to {}: {}\n", from, to, e),
            e.to_string(),
        ),
    }
}

/// Handles the EXPORT command: publishes an artifact into the workspace root.
///
/// Falls back to the configured default filename when no name operand is
/// given. The presenter prints the download link; the result message carries
/// the byte count.
fn handle_cmd_export(
    source: &str,
    name: Option<&str>,
    config: &WorkbenchConfig,
    presenter: &dyn LinkPresenter,
) -> CommandResult {
    let dest_filename = name.unwrap_or(&config.default_export_name);

    match export_artifact(
        config.workspace_root_path(),
        Path::new(source),
        dest_filename,
        config.buffer_size,
        presenter,
    ) {
        Ok(result) => CommandResult {
            status: CommandStatus::Success,
            message: Some(format!(
                "Exported {} ({} bytes)\n",
                dest_filename, result.bytes_copied
            )),
        },
        Err(e) => failure(
            format!("Cannot export {}: {}\n", source, e),
            e.to_string(),
        ),
    }
}

/// Handles the LIST command: lists a directory, defaulting to the workspace root.
fn handle_cmd_list(path: Option<&str>, config: &WorkbenchConfig) -> CommandResult {
    let target = path
        .map(|p| Path::new(p).to_path_buf())
        .unwrap_or_else(|| config.workspace_root_path().to_path_buf());

    match ops::list_directory(&target) {
        Ok(entries) => {
            let message = if entries.is_empty() {
                format!("{} is empty\n", target.display())
            } else {
                entries.join("\n") + "\n"
            };
            CommandResult {
                status: CommandStatus::Success,
                message: Some(message),
            }
        }
        Err(e) => failure(
            format!("Cannot list {}: {}\n", target.display(), e),
            e.to_string(),
        ),
    }
}

fn handle_cmd_help() -> CommandResult {
    let message = "\
Commands:
  RM <path>            remove a file or directory tree
  MKDIR <path>         create a directory (and parents)
  MV <from> <to>       rename, refusing to overwrite
  EXPORT <src> [name]  copy an artifact into the workspace root
  LIST [path]          list a directory (workspace root by default)
  HELP                 this summary
  QUIT                 end the session
";
    CommandResult {
        status: CommandStatus::Success,
        message: Some(message.to_string()),
    }
}

/// Handles the QUIT command: signals session close.
fn handle_cmd_quit() -> CommandResult {
    info!("Session close requested");
    CommandResult {
        status: CommandStatus::CloseSession,
        message: Some("Goodbye\n".to_string()),
    }
}

/// Handles unknown or malformed input: returns an error response.
fn handle_cmd_unknown(raw: &str) -> CommandResult {
    let message = if raw.is_empty() {
        "Type HELP for the command summary\n".to_string()
    } else {
        format!("Unrecognized command: {}. Type HELP for usage.\n", raw)
    };
    CommandResult {
        status: CommandStatus::Failure("Unknown command".into()),
        message: Some(message),
    }
}

fn failure(message: String, reason: String) -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure(reason),
        message: Some(message),
    }
}
