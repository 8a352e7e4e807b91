//! Interactive session loop
//!
//! Reads command lines from stdin, dispatches them, and writes the resulting
//! messages back to stdout until QUIT or end of input.

use log::{info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::WorkbenchConfig;
use crate::export::TerminalLinkPresenter;
use crate::shell::commands::CommandStatus;
use crate::shell::handlers::handle_command;
use crate::shell::parser::parse_command;

pub struct Shell {
    config: Arc<WorkbenchConfig>,
}

impl Shell {
    pub fn new(config: Arc<WorkbenchConfig>) -> Self {
        Self { config }
    }

    /// Runs the session until QUIT or EOF.
    pub async fn run(&self) -> Result<(), std::io::Error> {
        // Make sure the workspace root exists before the first EXPORT or LIST
        if let Err(e) = std::fs::create_dir_all(self.config.workspace_root_path()) {
            warn!("Failed to create workspace root: {}", e);
        } else {
            info!("Workspace root: {}", self.config.workspace_root);
        }

        let mut reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let presenter = TerminalLinkPresenter;

        stdout
            .write_all(b"Workbench ready. Type HELP for commands.\n")
            .await?;
        stdout.flush().await?;

        let mut line = String::new();
        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            line.clear();
            let n = reader.read_line(&mut line).await?;
            if n == 0 {
                info!("End of input, closing session");
                break;
            }

            let command = parse_command(&line);
            let result = handle_command(&command, &self.config, &presenter);

            if let Some(msg) = result.message {
                stdout.write_all(msg.as_bytes()).await?;
                stdout.flush().await?;
            }

            if result.status == CommandStatus::CloseSession {
                break;
            }
        }

        Ok(())
    }
}
