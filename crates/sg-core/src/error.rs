//! Error types for sg-core

use thiserror::Error;

/// Core error type for schemagen
#[derive(Error, Debug)]
pub enum CoreError {
    /// G001: Configuration file not found
    #[error("[G001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// G002: Failed to parse configuration file
    #[error("[G002] Failed to parse config {path}: {source}")]
    ConfigParseError {
        path: String,
        source: serde_yaml::Error,
    },

    /// G003: Invalid configuration value
    #[error("[G003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// G004: Migration source directory missing or unreadable
    #[error("[G004] Failed to read migrations from '{path}': {source}")]
    DirectoryRead {
        path: String,
        source: std::io::Error,
    },

    /// G005: Failed to read a migration or config file
    #[error("[G005] Failed to read '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// G006: Failed to open or write the schema artifact
    #[error("[G006] Failed to write schema file '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },

    /// G007: The metadata store reports an unfinished migration
    #[error("[G007] Migration state is dirty at version {version}. Fix the migration first")]
    DirtyState { version: u64 },

    /// G008: Code generator could not be started
    #[error("[G008] Failed to launch generator '{program}': {source}")]
    GeneratorLaunch {
        program: String,
        source: std::io::Error,
    },

    /// G009: Code generator exited unsuccessfully
    #[error("[G009] Generator '{program}' exited with status {code}")]
    GeneratorExit { program: String, code: i32 },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
