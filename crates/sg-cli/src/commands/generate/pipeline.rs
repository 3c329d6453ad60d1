//! Probe → catalog → select → merge → generate

use anyhow::{Context, Result};
use sg_core::{list_migrations, merge, select_up_to, Config, CoreError, MergeReport};
use sg_db::{VersionProbe, VersionState};
use std::path::Path;

use super::generator::GeneratorInvoker;

/// What a successful run did
#[derive(Debug)]
pub(crate) struct PipelineOutcome {
    pub(crate) state: VersionState,
    pub(crate) merge: MergeReport,
}

/// Run one generation pass.
///
/// Every stage finishes before the next starts and any failure ends the
/// run. A dirty migration state stops the run before the migration
/// directory is touched. The schema file is closed before the generator
/// starts.
pub(crate) async fn run_pipeline(
    config: &Config,
    root: &Path,
    probe: &dyn VersionProbe,
    invoker: &dyn GeneratorInvoker,
) -> Result<PipelineOutcome> {
    let state = probe
        .probe()
        .await
        .with_context(|| format!("Failed to read migration info from {}", probe.db_type()))?;

    log::info!("version: {}, dirty: {}", state.version, state.dirty);

    if state.dirty {
        return Err(CoreError::DirtyState {
            version: state.version,
        }
        .into());
    }

    let source = config.source_path_absolute(root);
    log::info!("Reading from migration source path... {}", source.display());

    let catalog = list_migrations(&source)?;
    let selection = select_up_to(&catalog, state.version, config.order);
    log::debug!(
        "Selected {} of {} migrations ({} order)",
        selection.len(),
        catalog.len(),
        config.order
    );

    let destination = config.destination_path_absolute(root);
    let report = merge(&selection, &destination)?;
    log::info!(
        "Wrote {} ({} files, {} bytes, sha256 {})",
        report.destination.display(),
        report.files,
        report.bytes,
        report.checksum
    );

    let code = invoker.invoke(root).await?;
    if code != 0 {
        return Err(CoreError::GeneratorExit {
            program: invoker.program().to_string(),
            code,
        }
        .into());
    }

    Ok(PipelineOutcome {
        state,
        merge: report,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
