use crate::options::TraversalConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a directory listing says an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, devices and anything else that is neither.
    Other,
}

/// One child returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The base name, lossily converted to UTF-8.
    pub name: String,
    /// The full path of the entry.
    pub path: PathBuf,
    /// Kind as reported by the listing. Symlinks are not followed.
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Metadata returned by a stat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub kind: EntryKind,
    /// Size the filesystem reports for the entry itself. For a directory this
    /// is the inode size, not the total of its contents.
    pub size: u64,
}

/// A rendered tree together with what produced it.
#[derive(Debug, Serialize)]
pub struct TreeResult {
    /// The root directory that was rendered.
    pub root: PathBuf,
    /// The configuration used for the render.
    pub config: TraversalConfig,
    /// The `tree`-style text, one newline-terminated line per entry, root first.
    pub tree: String,
}
