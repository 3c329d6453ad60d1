//! Gen command implementation
//!
//! Reads the applied migration version from the metadata store, merges every
//! `up` migration at or below it into the schema file, then runs the code
//! generator against that file.

pub(crate) mod generator;
pub(crate) mod overrides;
pub(crate) mod pipeline;

use anyhow::Result;
use sg_db::PostgresProbe;

use crate::cli::{GenArgs, GlobalArgs};
use crate::commands::common::{load_config, project_root};
use generator::ProcessInvoker;
use overrides::apply_overrides;
use pipeline::run_pipeline;

/// Execute the gen command
pub async fn execute(args: &GenArgs, global: &GlobalArgs) -> Result<()> {
    let root = project_root(global)?;
    let config = apply_overrides(load_config(global, &root)?, args)?;

    let probe = PostgresProbe::new(config.database.clone());
    let invoker = ProcessInvoker::new(config.generator.clone());

    let outcome = run_pipeline(&config, &root, &probe, &invoker).await?;

    println!(
        "Generated from {} migration{} up to version {} ({})",
        outcome.merge.files,
        if outcome.merge.files == 1 { "" } else { "s" },
        outcome.state.version,
        outcome.merge.destination.display()
    );

    Ok(())
}
