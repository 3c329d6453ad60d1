//! sg-db - Metadata store access for schemagen
//!
//! This crate provides the `VersionProbe` trait, which reports the applied
//! migration version and dirty flag, and its PostgreSQL implementation.

pub mod error;
pub mod postgres;
pub mod traits;

pub use error::{DbError, DbResult};
pub use postgres::PostgresProbe;
pub use traits::{VersionProbe, VersionState};
