//! Concatenation of selected migrations into the schema artifact

use crate::error::{CoreError, CoreResult};
use crate::migration::MigrationFile;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Summary of a completed merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Artifact that was written
    pub destination: PathBuf,

    /// Number of migration files appended
    pub files: usize,

    /// Total bytes written
    pub bytes: u64,

    /// SHA-256 of the artifact contents, lowercase hex
    pub checksum: String,
}

/// Write the byte concatenation of `selection` to `destination`.
///
/// The destination is created or truncated before anything is read, and
/// each file is appended verbatim with no separator. The first read or
/// write failure aborts the merge; whatever was written so far stays on
/// disk. The parent directory is not created.
pub fn merge(selection: &[MigrationFile], destination: &Path) -> CoreResult<MergeReport> {
    let write_err = |e: std::io::Error| CoreError::FileWrite {
        path: destination.display().to_string(),
        source: e,
    };

    let mut dest = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)
        .map_err(write_err)?;

    let mut hasher = Sha256::new();
    let mut bytes = 0u64;

    for file in selection {
        let content = std::fs::read(&file.path).map_err(|e| CoreError::FileRead {
            path: file.path.display().to_string(),
            source: e,
        })?;

        dest.write_all(&content).map_err(write_err)?;
        hasher.update(&content);
        bytes += content.len() as u64;

        log::debug!("Merged {} ({} bytes)", file.name, content.len());
    }

    dest.flush().map_err(write_err)?;
    drop(dest);

    Ok(MergeReport {
        destination: destination.to_path_buf(),
        files: selection.len(),
        bytes,
        checksum: format!("{:x}", hasher.finalize()),
    })
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
