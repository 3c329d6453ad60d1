//! Shared utilities for CLI commands

use anyhow::{bail, Context, Result};
use sg_core::Config;
use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// Resolve the project directory to an absolute path.
pub(crate) fn project_root(global: &GlobalArgs) -> Result<PathBuf> {
    let root = if global.project_dir.is_absolute() {
        global.project_dir.clone()
    } else {
        std::env::current_dir()
            .context("Failed to read current directory")?
            .join(&global.project_dir)
    };

    if !root.is_dir() {
        bail!("Project directory not found: {}", root.display());
    }

    Ok(root)
}

/// Load configuration from `--config` or the project directory.
pub(crate) fn load_config(global: &GlobalArgs, root: &std::path::Path) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(path).context("Failed to load configuration file"),
        None => Config::load_from_dir(root).context("Failed to load project configuration"),
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
