//! sg-core - Core library for schemagen
//!
//! This crate provides the configuration model, the error taxonomy, and the
//! migration catalog / selection / merge logic that turns a directory of
//! versioned migration files into a single schema artifact.

pub mod catalog;
pub mod config;
pub mod error;
pub mod merge;
pub mod migration;
pub mod selector;

pub use catalog::list_migrations;
pub use config::{Config, DatabaseConfig, GeneratorConfig, MergeOrder};
pub use error::{CoreError, CoreResult};
pub use merge::{merge, MergeReport};
pub use migration::{Direction, MigrationFile};
pub use selector::select_up_to;
