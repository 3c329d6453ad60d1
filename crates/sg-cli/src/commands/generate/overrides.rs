//! Layering of `gen` flags over the loaded configuration

use anyhow::{Context, Result};
use sg_core::Config;

use crate::cli::GenArgs;

/// Apply the flags that were given on the command line, then validate.
pub(crate) fn apply_overrides(mut config: Config, args: &GenArgs) -> Result<Config> {
    fn set<T: Clone>(target: &mut T, value: &Option<T>) {
        if let Some(v) = value {
            *target = v.clone();
        }
    }

    set(&mut config.source, &args.source);
    set(&mut config.destination, &args.dest);
    set(&mut config.database.host, &args.host);
    set(&mut config.database.port, &args.port);
    set(&mut config.database.username, &args.username);
    set(&mut config.database.password, &args.password);
    set(&mut config.database.dbname, &args.dbname);
    set(&mut config.database.sslmode, &args.sslmode);
    set(&mut config.database.migrations_table, &args.migrations_table);
    set(&mut config.generator.program, &args.generator);

    if let Some(order) = args.order {
        config.order = order.into();
    }
    if !args.generator_args.is_empty() {
        config.generator.args = args.generator_args.clone();
    }

    config.validate().context("Invalid gen options")?;
    Ok(config)
}

#[cfg(test)]
#[path = "overrides_test.rs"]
mod tests;
