//! Configuration types and parsing for schemagen.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names searched in the project directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["schemagen.yml", "schemagen.yaml"];

/// Main configuration, built once at startup and never mutated afterwards.
///
/// Every field has a default, so an absent config file is equivalent to
/// an empty one. CLI flags are layered on top by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing the migration files
    #[serde(default = "default_source")]
    pub source: String,

    /// Schema artifact written by the merge
    #[serde(default = "default_destination")]
    pub destination: String,

    /// How selected migrations are ordered before merging
    #[serde(default)]
    pub order: MergeOrder,

    /// Metadata store connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// External code generator invoked after the merge
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: default_destination(),
            order: MergeOrder::default(),
            database: DatabaseConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Ordering applied to the selected migrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MergeOrder {
    /// Stable sort by parsed version
    #[default]
    Version,
    /// Keep directory listing order
    Listing,
}

impl std::fmt::Display for MergeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeOrder::Version => write!(f, "version"),
            MergeOrder::Listing => write!(f, "listing"),
        }
    }
}

/// PostgreSQL connection settings for the version probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Database name; empty means the server default for the user
    #[serde(default)]
    pub dbname: String,

    #[serde(default = "default_sslmode")]
    pub sslmode: String,

    /// Table holding the `(version, dirty)` row
    #[serde(default = "default_migrations_table")]
    pub migrations_table: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: default_username(),
            password: String::new(),
            dbname: String::new(),
            sslmode: default_sslmode(),
            migrations_table: default_migrations_table(),
        }
    }
}

/// External generator command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_program")]
    pub program: String,

    #[serde(default = "default_generator_args")]
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: default_generator_program(),
            args: default_generator_args(),
        }
    }
}

impl GeneratorConfig {
    /// Render the command line for log output
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const DEFAULT_SOURCE_PATH: &str = "db/migrations";

const DEFAULT_DEST_FILENAME: &str = "db/schema.sql";

fn default_source() -> String {
    DEFAULT_SOURCE_PATH.to_string()
}

fn default_destination() -> String {
    DEFAULT_DEST_FILENAME.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_username() -> String {
    "postgres".to_string()
}

fn default_sslmode() -> String {
    "disable".to_string()
}

fn default_migrations_table() -> String {
    "schema_migrations".to_string()
}

fn default_generator_program() -> String {
    "sqlc".to_string()
}

fn default_generator_args() -> Vec<String> {
    vec!["generate".to_string()]
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    ///
    /// Looks for schemagen.yml or schemagen.yaml and falls back to the
    /// built-in defaults when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
        {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            ("source", &self.source),
            ("destination", &self.destination),
            ("generator.program", &self.generator.program),
            ("database.migrations_table", &self.database.migrations_table),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("'{}' cannot be empty", field),
                });
            }
        }

        if self.database.port == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "'database.port' must be non-zero".to_string(),
            });
        }

        Ok(())
    }

    /// Migration directory resolved against a project root
    ///
    /// Absolute paths are returned unchanged.
    pub fn source_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.source)
    }

    /// Schema artifact path resolved against a project root
    pub fn destination_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.destination)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
