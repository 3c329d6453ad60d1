//! Version probe trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Migration state reported by the metadata store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionState {
    /// Latest applied migration version
    pub version: u64,

    /// Set when the last migration did not complete cleanly
    pub dirty: bool,
}

/// Source of the applied migration version.
///
/// Implementations are queried once per run and must not cache results.
#[async_trait]
pub trait VersionProbe: Send + Sync {
    /// Fetch the current version and dirty flag
    async fn probe(&self) -> DbResult<VersionState>;

    /// Store type identifier for logging
    fn db_type(&self) -> &'static str;
}
