//! Workbench - Entry Point
//!
//! An interactive workspace file manager for long-running training sessions.

use env_logger;
use log::{error, info};
use std::sync::Arc;

use workbench::Shell;
use workbench::WorkbenchConfig;
use workbench::error::WorkbenchError;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching workbench shell...");

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), WorkbenchError> {
    let config = WorkbenchConfig::load()?;
    let shell = Shell::new(Arc::new(config));
    shell.run().await?;
    Ok(())
}
