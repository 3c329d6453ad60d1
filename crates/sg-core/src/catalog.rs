//! Migration directory listing

use crate::error::{CoreError, CoreResult};
use crate::migration::MigrationFile;
use std::path::Path;

/// List the migration files of `source_dir`, sorted by file name.
///
/// The listing is not recursive. Directories are ignored, and entries whose
/// name does not start with a numeric version are skipped with a warning.
pub fn list_migrations(source_dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    let dir_err = |e: std::io::Error| CoreError::DirectoryRead {
        path: source_dir.display().to_string(),
        source: e,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(source_dir).map_err(dir_err)? {
        let entry = entry.map_err(dir_err)?;
        let path = entry.path();

        if entry.file_type().map_err(dir_err)?.is_dir() {
            log::debug!("Skipping directory {}", path.display());
            continue;
        }

        match MigrationFile::parse(&path) {
            Some(file) => entries.push(file),
            None => log::warn!(
                "Failed to parse version number of {}, skipping...",
                entry.file_name().to_string_lossy()
            ),
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
