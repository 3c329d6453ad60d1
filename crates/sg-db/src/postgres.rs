//! PostgreSQL version probe

use crate::error::{DbError, DbResult};
use crate::traits::{VersionProbe, VersionState};
use async_trait::async_trait;
use sg_core::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{ConnectOptions, Connection};

/// Reads `(version, dirty)` from a golang-migrate style table
pub struct PostgresProbe {
    config: DatabaseConfig,
}

impl PostgresProbe {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Build connection options from the configured parameters.
    ///
    /// An empty `dbname` leaves the database unset so the server default
    /// for the user applies.
    pub fn connect_options(&self) -> DbResult<PgConnectOptions> {
        let ssl_mode: PgSslMode = self.config.sslmode.parse().map_err(|e| {
            DbError::ConnectionError(format!("invalid sslmode '{}': {}", self.config.sslmode, e))
        })?;

        let mut options = PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.username)
            .password(&self.config.password)
            .ssl_mode(ssl_mode);

        if !self.config.dbname.is_empty() {
            options = options.database(&self.config.dbname);
        }

        Ok(options)
    }

    /// The version query for the configured table
    pub fn version_query(&self) -> String {
        format!(
            "SELECT version, dirty FROM {}",
            quote_qualified(&self.config.migrations_table)
        )
    }
}

#[async_trait]
impl VersionProbe for PostgresProbe {
    async fn probe(&self) -> DbResult<VersionState> {
        let options = self.connect_options()?;
        log::debug!(
            "Connecting to postgres at {}:{} as {}",
            self.config.host,
            self.config.port,
            self.config.username
        );

        let mut conn = options
            .connect()
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        let sql = self.version_query();
        let row: Option<(i64, bool)> = sqlx::query_as(&sql)
            .fetch_optional(&mut conn)
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        if let Err(e) = conn.close().await {
            log::debug!("Error closing postgres connection: {e}");
        }

        let (version, dirty) = row.ok_or_else(|| {
            DbError::QueryError(format!(
                "no row in {}",
                self.config.migrations_table
            ))
        })?;
        version_state(version, dirty)
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}

/// Convert a raw `(version, dirty)` row, rejecting negative versions.
pub(crate) fn version_state(version: i64, dirty: bool) -> DbResult<VersionState> {
    let version = u64::try_from(version)
        .map_err(|_| DbError::QueryError(format!("negative version {}", version)))?;
    Ok(VersionState { version, dirty })
}

/// Quote each component of a possibly schema-qualified name.
pub(crate) fn quote_qualified(name: &str) -> String {
    name.split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
