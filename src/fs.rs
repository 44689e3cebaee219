//! Filesystem primitives the tree builder reads through.

use crate::error::TreeError;
use crate::types::{DirectoryEntry, EntryKind, EntryStat};
use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

/// Directory listing and stat, the only filesystem access a render performs.
///
/// Implementations must not swallow errors: a failed listing or stat has to
/// come back as `Err` so the render aborts instead of returning a partial tree.
pub trait FileSystem: Send + Sync {
    /// Lists the immediate children of `dir` in the order the source yields them.
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, TreeError>;
    /// Returns kind and size for `path`.
    fn stat(&self, path: &Path) -> Result<EntryStat, TreeError>;
}

/// Makes `path` absolute against the working directory without resolving
/// symlinks, so the root keeps the name it was given.
pub fn absolute_root(path: &Path) -> Result<PathBuf, TreeError> {
    std::path::absolute(path).map_err(|e| TreeError::io(path, e))
}

/// The host filesystem, through `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

impl FileSystem for OsFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, TreeError> {
        let read_dir = fs::read_dir(dir).map_err(|e| TreeError::io(dir, e))?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| TreeError::io(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| TreeError::io(&path, e))?;
            entries.push(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: kind_of(file_type),
                path,
            });
        }
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> Result<EntryStat, TreeError> {
        let metadata = fs::metadata(path).map_err(|e| TreeError::io(path, e))?;
        Ok(EntryStat {
            kind: kind_of(metadata.file_type()),
            size: metadata.len(),
        })
    }
}
