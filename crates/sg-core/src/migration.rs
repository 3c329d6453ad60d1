//! Migration file naming: `<version>_<description>.<direction>.<ext>`

use std::fmt;
use std::path::{Path, PathBuf};

/// Direction tag of a migration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Applies a change
    Up,
    /// Reverts a change
    Down,
    /// Anything else found in the direction slot
    Other,
}

impl Direction {
    fn from_segment(segment: &str) -> Self {
        match segment {
            "up" => Direction::Up,
            "down" => Direction::Down,
            _ => Direction::Other,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Other => write!(f, "other"),
        }
    }
}

/// One entry of the migration directory
///
/// Contents are not held here; the merger reads them from `path` when the
/// file is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// File name, unique within the directory
    pub name: String,

    /// Full path of the file
    pub path: PathBuf,

    /// Leading numeric segment of the name
    pub version: u64,

    /// Second-to-last dot-delimited segment of the name
    pub direction: Direction,

    /// Last dot-delimited segment of the name (empty without a dot)
    pub extension: String,
}

impl MigrationFile {
    /// Parse a directory entry.
    ///
    /// Returns `None` when the text before the first `_` is not a
    /// non-negative integer.
    pub fn parse(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let version = parse_version(name)?;

        let segments: Vec<&str> = name.split('.').collect();
        let direction = match segments.len() {
            0 | 1 => Direction::Other,
            n => Direction::from_segment(segments[n - 2]),
        };
        let extension = if segments.len() > 1 {
            segments[segments.len() - 1].to_string()
        } else {
            String::new()
        };

        Some(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            version,
            direction,
            extension,
        })
    }

    pub fn is_up(&self) -> bool {
        self.direction == Direction::Up
    }
}

/// Version prefix of a file name: everything before the first `_`.
///
/// A name without `_` is parsed whole, so `7.up.sql` fails while `7` alone
/// would parse.
pub fn parse_version(name: &str) -> Option<u64> {
    let prefix = name.split('_').next().unwrap_or(name);
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
