//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use sg_core::MergeOrder;
use std::path::PathBuf;

/// schemagen - merge applied migrations into one schema file and generate code from it
#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override config file path (default: <project-dir>/schemagen.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect SQL from applied migrations into one schema file and run the code generator
    Gen(GenArgs),
}

/// Arguments for the gen command
///
/// Unset flags fall back to the config file, then to built-in defaults.
#[derive(Args, Debug, Default)]
pub struct GenArgs {
    /// Migration directory to read from [default: db/migrations]
    #[arg(short, long)]
    pub source: Option<String>,

    /// Schema file to write [default: db/schema.sql]
    #[arg(short, long)]
    pub dest: Option<String>,

    /// PG host [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// PG host port [default: 5432]
    #[arg(long)]
    pub port: Option<u16>,

    /// PG username [default: postgres]
    #[arg(short, long)]
    pub username: Option<String>,

    /// PG password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// PG database name
    #[arg(long)]
    pub dbname: Option<String>,

    /// PG sslmode [default: disable]
    #[arg(long)]
    pub sslmode: Option<String>,

    /// Table holding the migration version [default: schema_migrations]
    #[arg(long)]
    pub migrations_table: Option<String>,

    /// Order of merged migrations
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Code generator executable [default: sqlc]
    #[arg(long)]
    pub generator: Option<String>,

    /// Generator argument, repeatable; replaces the configured arguments [default: generate]
    #[arg(long = "generator-arg", allow_hyphen_values = true)]
    pub generator_args: Vec<String>,
}

/// Merge order choices
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    /// Sort by parsed version
    Version,
    /// Keep directory listing order
    Listing,
}

impl From<OrderArg> for MergeOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Version => MergeOrder::Version,
            OrderArg::Listing => MergeOrder::Listing,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
