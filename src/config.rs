//! Configuration management for the workbench
//!
//! All knobs live in one flat structure: the workspace root that EXPORT
//! publishes into, the fallback export filename, and the copy buffer size.
//! Values come from defaults, an optional `workbench.toml`, and
//! `WORKBENCH_*` environment overrides, in that order.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Workbench configuration
#[derive(Debug, Deserialize, Clone)]
pub struct WorkbenchConfig {
    /// Directory EXPORT copies artifacts into
    pub workspace_root: String,

    /// Filename used by EXPORT when none is given
    pub default_export_name: String,

    /// Buffer size for artifact copies, in bytes
    pub buffer_size: usize,
}

impl WorkbenchConfig {
    /// Load configuration from workbench.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("workspace_root", "./workspace")?
            .set_default("default_export_name", "best.pt")?
            .set_default("buffer_size", 8192_i64)?
            .add_source(File::with_name("workbench").required(false))
            .add_source(Environment::with_prefix("WORKBENCH"))
            .build()?;

        let config: WorkbenchConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.workspace_root.is_empty() {
            return Err(config::ConfigError::Message(
                "workspace_root cannot be empty".into(),
            ));
        }

        if self.default_export_name.is_empty() {
            return Err(config::ConfigError::Message(
                "default_export_name cannot be empty".into(),
            ));
        }

        if self
            .default_export_name
            .contains(std::path::is_separator)
        {
            return Err(config::ConfigError::Message(
                "default_export_name must be a bare filename".into(),
            ));
        }

        if self.buffer_size == 0 {
            return Err(config::ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get the workspace root as a path
    pub fn workspace_root_path(&self) -> &Path {
        Path::new(&self.workspace_root)
    }

    /// Get the absolute path of the workspace root
    pub fn absolute_workspace_root(&self) -> std::io::Result<PathBuf> {
        self.workspace_root_path().canonicalize()
    }

    /// Destination path inside the workspace root for an exported artifact
    pub fn export_path(&self, filename: &str) -> PathBuf {
        self.workspace_root_path().join(filename)
    }
}
