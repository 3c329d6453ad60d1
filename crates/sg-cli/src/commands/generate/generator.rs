//! External code generator execution.

use async_trait::async_trait;
use sg_core::{CoreError, CoreResult, GeneratorConfig};
use std::path::Path;

/// Runs the code generator once the schema artifact is complete.
#[async_trait]
pub(crate) trait GeneratorInvoker: Send + Sync {
    /// Program name used in diagnostics
    fn program(&self) -> &str;

    /// Run the generator in `working_dir` and return its exit code.
    ///
    /// A generator killed by a signal reports `-1`.
    async fn invoke(&self, working_dir: &Path) -> CoreResult<i32>;
}

/// Spawns the configured program as a child process.
///
/// The child inherits the environment and stdio of this process, so the
/// generator's own output reaches the terminal unchanged.
pub(crate) struct ProcessInvoker {
    config: GeneratorConfig,
}

impl ProcessInvoker {
    pub(crate) fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl GeneratorInvoker for ProcessInvoker {
    fn program(&self) -> &str {
        &self.config.program
    }

    async fn invoke(&self, working_dir: &Path) -> CoreResult<i32> {
        log::info!("Running '{}'", self.config.command_line());

        let status = tokio::process::Command::new(&self.config.program)
            .args(&self.config.args)
            .current_dir(working_dir)
            .status()
            .await
            .map_err(|e| CoreError::GeneratorLaunch {
                program: self.config.program.clone(),
                source: e,
            })?;

        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
